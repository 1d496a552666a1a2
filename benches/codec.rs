use routers_directions::refresh::{RefreshCursor, RefreshStreams};
use routers_directions::{RouteOptions, RouteRefreshResponse, RouteResponse, ShapeFormat, Waypoint};
use routers_fixtures::{ROUTE_REFRESH, ROUTE_RESPONSE, fixture};

use criterion::criterion_main;
use std::hint::black_box;

fn options() -> RouteOptions {
    RouteOptions {
        shape_format: ShapeFormat::Polyline6,
        ..RouteOptions::new(vec![
            Waypoint::new(-122.4194, 37.7749),
            Waypoint::new(-122.41, 37.78),
            Waypoint::new(-122.4, 37.785),
        ])
    }
}

fn codec_benchmark(c: &mut criterion::Criterion) {
    #[cfg(feature = "tracing")]
    routers_directions::util::trace::initialize_tracer();

    let response = fixture(ROUTE_RESPONSE).expect("Fixture must exist");
    let refresh = fixture(ROUTE_REFRESH).expect("Fixture must exist");

    let mut group = c.benchmark_group("codec");
    group.significance_level(0.1).sample_size(30);

    group.bench_function("decode_route_response", |b| {
        b.iter(|| {
            RouteResponse::from_slice(black_box(&response), options())
                .expect("Response must decode successfully")
        })
    });

    let decoded =
        RouteResponse::from_slice(&response, options()).expect("Response must decode successfully");

    group.bench_function("encode_route_response", |b| {
        b.iter(|| decoded.to_vec().expect("Response must encode successfully"))
    });

    group.bench_function("refresh_route", |b| {
        b.iter(|| {
            let refreshed = RouteRefreshResponse::from_slice(black_box(&refresh))
                .expect("Refresh must decode successfully");

            let mut route = decoded.routes[0].clone();
            route.refresh(
                &refreshed.route,
                RefreshCursor::default(),
                RefreshStreams::all(),
            );
            route
        })
    });

    group.finish();
}

criterion::criterion_group!(standard_benches, codec_benchmark);
criterion_main!(standard_benches);
