use grid_util::point::Point;
use terrain_pathfinding::PathFinder;

// The weight scales every move as well as the straight-line heuristic, so the route stays the
// same while all costs grow by the same factor.
fn main() {
    const N: usize = 30;
    let map = (0..N)
        .map(|y| {
            (0..N)
                .map(|x| match (x, y) {
                    (8..=15, 8..=15) => '*',
                    (0..=5, 3..=8) => '^',
                    (10..=15, 0..=5) => '-',
                    _ => '.',
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n");
    let start = Point::new(1, 1);
    let end = Point::new(N as i32 - 3, N as i32 - 3);
    for weight in [1.0, 1.5] {
        let mut finder = PathFinder::new(&map, N, N)
            .and_then(|finder| finder.with_weight(weight))
            .unwrap();
        finder.find_path(start, end).unwrap();
        println!("weight {weight}:");
        print!("{}", finder.report());
        println!();
    }
    let mut finder = PathFinder::new(&map, N, N).unwrap();
    finder.find_path(start, end).unwrap();
    print!("{}", finder.render());
}
