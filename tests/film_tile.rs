use okapi_rs::core::prelude::*;
use okapi_rs::filters::*;
use okapi_rs::samplers::*;

use std::sync::Arc;

fn tent_filter() -> Arc<dyn Filter> {
    Arc::new(TentFilter::new(&Vector2f::new(1.0, 1.0)))
}

fn box_filter() -> Arc<dyn Filter> {
    Arc::new(BoxFilter::new(&Vector2f::new(1.0, 1.0)))
}

fn bounds(w: i32, h: i32) -> Bounds2i {
    Bounds2i::from(((0, 0), (w, h)))
}

fn tile(offset: (i32, i32), size: (i32, i32), channels: usize, film: &Bounds2i) -> FilmTile {
    FilmTile::new(
        &Point2i::from(offset),
        &Vector2i::from(size),
        channels,
        &tent_filter(),
        film,
    )
}

fn assert_near(a: &[Float], b: &[Float], eps: Float) {
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b.iter()) {
        assert!((x - y).abs() <= eps, "{:?} != {:?}", a, b);
    }
}

#[test]
fn film_tile_correct_offset_and_size() {
    let ft = tile((20, 20), (4, 4), 3, &bounds(30, 30));
    assert_eq!(ft.offset(), Point2i::new(20, 20));
    assert_eq!(ft.size(), Vector2i::new(4, 4));
    assert_eq!(ft.width(), 4);
    assert_eq!(ft.height(), 4);
}

#[test]
fn film_tile_bounds_are_dilated_and_clipped() {
    let film = bounds(30, 30);
    let cases = [
        ((0, 0), Bounds2i::from(((0, 0), (5, 5)))),
        ((4, 0), Bounds2i::from(((3, 0), (9, 5)))),
        ((4, 4), Bounds2i::from(((3, 3), (9, 9)))),
        ((28, 4), Bounds2i::from(((27, 3), (30, 9)))),
        ((28, 28), Bounds2i::from(((27, 27), (30, 30)))),
    ];
    for (offset, expected) in cases.iter() {
        let ft = tile(*offset, (4, 4), 3, &film);
        assert_eq!(ft.tile_bounds(), *expected, "offset {:?}", offset);
    }
}

#[test]
fn film_tile_add_sample() {
    let mut ft = tile((4, 4), (4, 4), 3, &bounds(30, 30));
    ft.add_sample(&Point2f::new(4.5, 4.5), &[1.0, 1.0, 1.0]);
    ft.add_sample(&Point2f::new(7.5, 6.5), &[0.5, 0.5, 0.5]);
    let image = ft.image(0);
    assert_eq!(image.width(), 4);
    assert_eq!(image.height(), 4);
    assert_eq!(image.get_pixel(0, 0), Spectrum::new(1.0, 1.0, 1.0));
    assert_eq!(image.get_pixel(3, 2), Spectrum::new(0.5, 0.5, 0.5));
}

#[test]
fn film_tile_sample_bounds_at_fractional_position() {
    let ft = tile((0, 0), (400, 400), 3, &bounds(400, 400));
    let b = ft.sample_bounds(&Point2f::new(100.1, 100.1));
    assert_eq!(b, Bounds2i::from(((99, 99), (101, 101))));
}

fn f1(p: &Point2f) -> [Float; 3] {
    let v = 0.5 * (1.0 + Float::sin((p.x * p.x + p.y * p.y) / 100.0));
    [v, v, v]
}

#[test]
fn film_tile_add_sample_matches_slow_but_correct() {
    let film = bounds(96, 64);
    let mut fast = FilmTile::new(&Point2i::zero(), &Vector2i::new(96, 64), 3, &tent_filter(), &film);
    let mut slow = FilmTile::new(&Point2i::zero(), &Vector2i::new(96, 64), 3, &tent_filter(), &film);
    let mut sampler = IndependentSampler::new(1, 0);
    for y in 0..64 {
        for x in 0..96 {
            let p = Point2f::new(x as Float, y as Float) + sampler.next_2d();
            let color = f1(&p);
            fast.add_sample(&p, &color);
            slow.add_sample_slow_but_correct(&p, &color);
        }
    }
    assert_near(fast.filter_weight_sums(), slow.filter_weight_sums(), 1e-5);
    for y in 0..64 {
        for x in 0..96 {
            let p = Point2i::new(x, y);
            let c = fast.sample_color(&p);
            assert!(c[0] >= 0.0);
            assert_near(&c, &slow.sample_color(&p), 1e-4);
        }
    }
}

#[test]
fn film_tile_add_tile_center_tile() {
    let film_bounds = bounds(12, 12);
    let mut film = tile((0, 0), (12, 12), 3, &film_bounds);
    let mut ft = tile((4, 4), (4, 4), 3, &film_bounds);
    for y in 4..8 {
        for x in 4..8 {
            for _ in 0..2 {
                ft.add_sample(&Point2f::new(x as Float + 0.5, y as Float + 0.5), &[1.0, 1.0, 1.0]);
            }
        }
    }
    film.add_tile(&ft);

    let mut expected_tile = vec![0.0; 36];
    for y in 1..5 {
        for x in 1..5 {
            expected_tile[y * 6 + x] = 2.0;
        }
    }
    assert_eq!(ft.filter_weight_sums(), expected_tile.as_slice());
    let sums: Vec<Float> = ft.radiance_sums(0).iter().map(|c| c[0]).collect();
    assert_eq!(sums, expected_tile);

    let mut expected_film = vec![0.0; 144];
    for y in 4..8 {
        for x in 4..8 {
            expected_film[y * 12 + x] = 2.0;
        }
    }
    assert_eq!(film.filter_weight_sums(), expected_film.as_slice());
    let sums: Vec<Spectrum> = film.radiance_sums(0);
    for (s, w) in sums.iter().zip(expected_film.iter()) {
        assert_eq!(*s, Spectrum::from(*w));
    }
}

#[test]
fn film_tile_add_tile_with_color_normal_albedo() {
    let film_bounds = bounds(12, 12);
    let mut film = tile((0, 0), (12, 12), 9, &film_bounds);
    let mut ft = tile((4, 4), (4, 4), 9, &film_bounds);
    let aovs = [0.114452, 0.0226659, 0.000832037, 0.0, -1.0, 0.0, 0.725, 0.71, 0.68];
    for y in 4..8 {
        for x in 4..8 {
            ft.add_sample(&Point2f::new(x as Float + 0.5, y as Float + 0.5), &aovs);
        }
    }
    assert_eq!(ft.sample_color(&Point2i::new(2, 2)), aovs.to_vec());

    film.add_tile(&ft);
    assert_eq!(film.sample_color(&Point2i::new(5, 5)), aovs.to_vec());
    assert_eq!(film.image(0).get_pixel(5, 5), Spectrum::new(0.114452, 0.0226659, 0.000832037));
    assert_eq!(film.image(3).get_pixel(5, 5), Spectrum::new(0.0, -1.0, 0.0));
    assert_eq!(film.image(6).get_pixel(5, 5), Spectrum::new(0.725, 0.71, 0.68));
    assert_eq!(film.radiance_sums(0)[5 + 5 * 12][0], 0.114452);
}

#[test]
fn film_tile_single_and_multiple_sample_weights() {
    for samples in [1, 16] {
        let film_bounds = bounds(2, 2);
        let mut ft = FilmTile::new(&Point2i::zero(), &Vector2i::new(2, 2), 3, &box_filter(), &film_bounds);
        for y in 0..2 {
            for x in 0..2 {
                for _ in 0..samples {
                    ft.add_sample(&Point2f::new(x as Float + 0.5, y as Float + 0.5), &[1.0, 1.0, 1.0]);
                }
            }
        }
        assert_eq!(ft.image(0).get_pixel(0, 0), Spectrum::one());
        assert_eq!(ft.image(0).get_pixel(1, 1), Spectrum::one());
    }
}

#[test]
fn film_tile_merging_tiles_equals_direct_splatting() {
    let film_size = Vector2i::new(50, 30);
    let film_bounds = Bounds2i::new(&Point2i::zero(), &film_size);
    let filter: Arc<dyn Filter> = Arc::new(GaussianFilter::new(&Vector2f::from(1.5), 0.5));
    let mut direct = FilmTile::new(&Point2i::zero(), &film_size, 3, &filter, &film_bounds);
    let mut merged = FilmTile::new(&Point2i::zero(), &film_size, 3, &filter, &film_bounds);

    let generator = TileGenerator::new(&Vector2i::new(16, 16), &film_size);
    for (index, desc) in generator.iter().enumerate() {
        let mut ft = FilmTile::new(&desc.offset, &desc.size, 3, &filter, &merged.tile_bounds());
        let mut sampler = IndependentSampler::new(4, index as u64);
        for y in 0..desc.size.y {
            for x in 0..desc.size.x {
                for _ in 0..4 {
                    let p = Point2f::new((desc.offset.x + x) as Float, (desc.offset.y + y) as Float)
                        + sampler.next_2d();
                    let c = f1(&p);
                    ft.add_sample(&p, &c);
                    direct.add_sample(&p, &c);
                }
            }
        }
        merged.add_tile(&ft);
    }
    assert_near(direct.filter_weight_sums(), merged.filter_weight_sums(), 1e-4);
    for y in 0..film_size.y {
        for x in 0..film_size.x {
            let p = Point2i::new(x, y);
            assert_near(&direct.sample_color(&p), &merged.sample_color(&p), 1e-4);
        }
    }
}

#[test]
fn film_tile_clear_resets_everything() {
    let mut ft = tile((0, 0), (8, 8), 3, &bounds(8, 8));
    ft.add_sample(&Point2f::new(3.2, 4.7), &[1.0, 2.0, 3.0]);
    assert!(ft.filter_weight_sums().iter().any(|w| *w > 0.0));
    ft.clear();
    assert!(ft.filter_weight_sums().iter().all(|w| *w == 0.0));
    assert!(ft.radiance_sums(0).iter().all(|c| c.is_black()));
    assert_eq!(ft.channel_count(), 3);
}

#[test]
#[should_panic]
fn film_tile_add_tile_rejects_channel_mismatch() {
    let film_bounds = bounds(8, 8);
    let mut film = tile((0, 0), (8, 8), 3, &film_bounds);
    let other = tile((0, 0), (4, 4), 9, &film_bounds);
    film.add_tile(&other);
}
