//! Great-circle distance between two coordinates.

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Great-circle distance in kilometers between two points given as
/// (latitude, longitude) degree pairs, using the haversine formula.
///
/// Pure function: symmetric in its endpoints, zero for identical
/// coordinates, and total for finite inputs.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lon1 = lon1.to_radians();
    let lat2 = lat2.to_radians();
    let lon2 = lon2.to_radians();

    let half_dlat = (lat2 - lat1) / 2.0;
    let half_dlon = (lon2 - lon1) / 2.0;

    let d = half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlon.sin().powi(2);

    // Rounding can push d a hair past 1.0 near antipodes, outside asin's domain.
    2.0 * EARTH_RADIUS_KM * d.min(1.0).sqrt().asin()
}
