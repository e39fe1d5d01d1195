use grid_util::point::Point;
use terrain_pathfinding::PathFinder;

// In this example a path is found on a 5x7 map with shape
// S.^^^..
// ..^*^..
// .--*--.
// ...*...
// ......E
// where
// - S marks the start
// - E marks the end
// - ^ are mountains, - is swamp and * is water
fn main() {
    let map = "\
        ..^^^..\n\
        ..^*^..\n\
        .--*--.\n\
        ...*...\n\
        .......";
    let mut finder = PathFinder::new(map, 5, 7).unwrap();
    let start = Point::new(0, 0);
    let end = Point::new(6, 4);
    if finder.find_path(start, end).unwrap() {
        println!("A path has been found:");
        for p in finder.last_path() {
            println!("{:?}", p);
        }
    }
    print!("{}", finder.report());
    print!("{}", finder.render());
}
