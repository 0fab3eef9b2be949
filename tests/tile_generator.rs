use okapi_rs::core::prelude::*;
use okapi_rs::filters::*;

use std::sync::Arc;

fn generator(tile: (i32, i32), film: (i32, i32)) -> TileGenerator {
    TileGenerator::new(&Vector2i::from(tile), &Vector2i::from(film))
}

#[test]
fn tile_generator_tile_count() {
    let cases = [
        ((40, 40), (0, 0), 0),
        ((40, 40), (80, 80), 4),
        ((40, 40), (81, 81), 9),
        ((40, 40), (90, 90), 9),
        ((1000, 1000), (90, 90), 1),
    ];
    for (tile, film, count) in cases.iter() {
        assert_eq!(generator(*tile, *film).tile_count(), *count, "{:?} {:?}", tile, film);
    }
}

#[test]
fn tile_generator_regular_tiles() {
    let tg = generator((40, 40), (80, 80));
    let expected = [(0, 0), (40, 0), (0, 40), (40, 40)];
    for (index, offset) in expected.iter().enumerate() {
        let desc = tg.tile_description(index);
        assert_eq!(desc.offset, Point2i::from(*offset));
        assert_eq!(desc.size, Vector2i::new(40, 40));
    }
}

#[test]
fn tile_generator_irregular_tiles() {
    let tg = generator((40, 40), (100, 80));
    assert_eq!(tg.tile_description(0).offset, Point2i::new(0, 0));
    assert_eq!(tg.tile_description(0).size, Vector2i::new(40, 40));
    assert_eq!(tg.tile_description(1).offset, Point2i::new(40, 0));
    assert_eq!(tg.tile_description(1).size, Vector2i::new(40, 40));
    assert_eq!(tg.tile_description(2).offset, Point2i::new(80, 0));
    assert_eq!(tg.tile_description(2).size, Vector2i::new(20, 40));

    let tg = generator((40, 40), (100, 100));
    assert_eq!(tg.tile_description(8).offset, Point2i::new(80, 80));
    assert_eq!(tg.tile_description(8).size, Vector2i::new(20, 20));
}

#[test]
fn tile_generator_tiles_cover_film_exactly_once() {
    let film_size = Vector2i::new(97, 53);
    let tg = TileGenerator::new(&Vector2i::new(PREFERRED_TILE_SIZE, PREFERRED_TILE_SIZE), &film_size);
    let mut hits = vec![0; (film_size.x * film_size.y) as usize];
    for desc in tg.iter() {
        for y in desc.offset.y..desc.offset.y + desc.size.y {
            for x in desc.offset.x..desc.offset.x + desc.size.x {
                hits[(y * film_size.x + x) as usize] += 1;
            }
        }
    }
    assert!(hits.iter().all(|h| *h == 1));
}

#[test]
fn tile_generator_multiple_tiles() {
    let filter: Arc<dyn Filter> = Arc::new(TentFilter::new(&Vector2f::new(1.0, 1.0)));
    let film_size = Vector2i::new(12, 12);
    let film_bounds = Bounds2i::new(&Point2i::zero(), &film_size);
    let mut film = FilmTile::new(&Point2i::zero(), &film_size, 3, &filter, &film_bounds);

    let tg = TileGenerator::new(&Vector2i::new(4, 4), &film_size);
    for index in 0..tg.tile_count() {
        let desc = tg.tile_description(index);
        let mut tile = FilmTile::new(&desc.offset, &desc.size, 3, &filter, &film.tile_bounds());
        for y in 0..desc.size.y {
            for x in 0..desc.size.x {
                let p = Point2f::new(
                    (desc.offset.x + x) as Float + 0.5,
                    (desc.offset.y + y) as Float + 0.5,
                );
                tile.add_sample(&p, &[1.0, 1.0, 1.0]);
            }
        }
        film.add_tile(&tile);
    }
    assert_eq!(film.filter_weight_sums(), vec![1.0; 144].as_slice());
}

#[test]
#[should_panic]
fn tile_generator_rejects_empty_tile_size() {
    generator((0, 40), (80, 80));
}
