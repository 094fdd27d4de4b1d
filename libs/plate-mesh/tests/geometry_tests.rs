//! End-to-end geometry checks: dome precision through the STL codec and
//! whole-plate bounds.

use approx::assert_abs_diff_eq;
use braille_cell::{page_number_cells, BrailleCell, DotPattern};
use config::constants::{dot_base_radius, DOT_HEIGHT, HOLE_RING_WIDTH};
use glam::DVec3;
use plate_mesh::primitives::Dome;
use plate_mesh::{build_plate_mesh, stl, PlateDimensions};

fn cell(numbers: &[u8]) -> BrailleCell {
    BrailleCell::from_pattern(DotPattern::from_dot_numbers(numbers), "x")
}

#[test]
fn dome_survives_stl_round_trip() {
    let base = DVec3::new(3.0, 4.0, 1.0);
    let dome = Dome::new(dot_base_radius(), DOT_HEIGHT).unwrap();
    let mesh = dome.to_mesh(base);
    assert_eq!(mesh.triangle_count(), 24 * 6 * 2 + 24);

    let decoded = stl::decode(&stl::encode(&mesh)).unwrap();
    assert_eq!(decoded.triangle_count(), mesh.triangle_count());

    let (min, max) = decoded.bounding_box();
    // f32 storage is the only source of error here.
    assert_abs_diff_eq!(max.z, 1.5, epsilon = 1e-6);
    assert_abs_diff_eq!(min.z, 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(max.x - base.x, 0.8, epsilon = 1e-6);
    assert_abs_diff_eq!(base.x - min.x, 0.8, epsilon = 1e-6);

    for (a, b) in mesh.triangles().iter().zip(decoded.triangles()) {
        for (u, v) in a.vertices.iter().zip(b.vertices.iter()) {
            assert!(u.distance(*v) < 1e-5);
        }
    }
}

#[test]
fn dome_apex_height_is_exact() {
    let base = DVec3::new(0.1, 0.2, 0.7);
    let dome = Dome::new(dot_base_radius(), DOT_HEIGHT).unwrap();
    let mesh = dome.to_mesh(base);

    let top = mesh
        .triangles()
        .iter()
        .flat_map(|t| t.vertices)
        .map(|v| v.z)
        .fold(f64::MIN, f64::max);
    assert_eq!(top, base.z + DOT_HEIGHT);

    let bottom_radius = mesh
        .triangles()
        .iter()
        .flat_map(|t| t.vertices)
        .filter(|v| v.z == base.z)
        .map(|v| (v.truncate() - base.truncate()).length())
        .fold(0.0, f64::max);
    assert_abs_diff_eq!(bottom_radius, dot_base_radius(), epsilon = 1e-12);
}

#[test]
fn plate_bounds_match_dimensions() {
    let lines = vec![vec![cell(&[1]), cell(&[1, 2]), cell(&[3, 6])], vec![cell(&[4])]];
    let pages = page_number_cells(1);
    let mesh = build_plate_mesh(&lines, &pages, 1.2).unwrap();
    let dims = PlateDimensions::for_lines(&lines, pages.len());

    let (min, max) = mesh.bounding_box();
    assert_abs_diff_eq!(min.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(min.y, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(min.z, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(max.x, dims.width, epsilon = 1e-9);
    assert_abs_diff_eq!(max.y, dims.height, epsilon = 1e-9);
    assert_abs_diff_eq!(max.z, 1.2 + DOT_HEIGHT, epsilon = 1e-12);
    assert!(mesh
        .triangles()
        .iter()
        .all(|t| t.vertices.iter().all(|v| v.is_finite())));
}

#[test]
fn plate_triangle_count_tracks_raised_dots() {
    let dome = Dome::new(dot_base_radius(), DOT_HEIGHT).unwrap().triangle_count();
    let pages = page_number_cells(1);

    let blank = build_plate_mesh(&[vec![BrailleCell::space()]], &pages, 1.0).unwrap();
    let dotted = build_plate_mesh(&[vec![cell(&[1, 2, 3])]], &pages, 1.0).unwrap();
    assert_eq!(dotted.triangle_count() - blank.triangle_count(), 3 * dome);

    // ⠼⠁ raises five dots: 3-4-5-6 and 1.
    let bare = build_plate_mesh(&[vec![BrailleCell::space()]], &[], 1.0).unwrap();
    assert_eq!(blank.triangle_count() - bare.triangle_count(), 5 * dome);
}

#[test]
fn dots_stay_inside_plate_and_clear_of_ring() {
    let lines = vec![vec![BrailleCell::new([true; 6], "め"); 4]; 3];
    let pages = page_number_cells(12);
    let mesh = build_plate_mesh(&lines, &pages, 1.0).unwrap();
    let dims = PlateDimensions::for_lines(&lines, pages.len());
    let ring = config::constants::hole_radius() + HOLE_RING_WIDTH;

    for tri in mesh.triangles() {
        for v in tri.vertices {
            if v.z <= 1.0 + 1e-12 {
                continue;
            }
            assert!(v.x > 0.0 && v.x < dims.width);
            assert!(v.y > 0.0 && v.y < dims.height);
        }
    }

    // Body dots never reach into the ring footprint.
    let stride = Dome::new(dot_base_radius(), DOT_HEIGHT).unwrap().triangle_count();
    let dome_tris = &mesh.triangles()[mesh.triangle_count() - 6 * 4 * 3 * stride..];
    for tri in dome_tris {
        for v in tri.vertices {
            assert!(v.truncate().distance(dims.hole_center) > ring);
        }
    }
}

#[test]
fn build_is_deterministic() {
    let lines = vec![vec![cell(&[1, 5]), cell(&[2, 4, 6])]];
    let pages = page_number_cells(3);
    let a = stl::encode(&build_plate_mesh(&lines, &pages, 1.0).unwrap());
    let b = stl::encode(&build_plate_mesh(&lines, &pages, 1.0).unwrap());
    assert_eq!(a, b);
}
