//! Recorded service responses shared by the tests and benches of the
//! workspace.

use std::path::{Path, PathBuf};

/// A two-leg driving route with steps, intersections, banners,
/// annotations, incidents and closures. Geometry is `polyline6`.
pub const ROUTE_RESPONSE: &str = "route_response.json";

/// A refresh of the last leg of [`ROUTE_RESPONSE`].
pub const ROUTE_REFRESH: &str = "route_refresh.json";

/// A single matching of a four point trace, one of which is unmatched.
/// Geometry is GeoJSON.
pub const MAP_MATCHING: &str = "map_matching.json";

/// A response carrying a `NoRoute` error code.
pub const NO_ROUTE: &str = "no_route.json";

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("resources")
        .join(name)
}

/// The bytes of the named fixture.
pub fn fixture(name: &str) -> std::io::Result<Vec<u8>> {
    std::fs::read(fixture_path(name))
}
