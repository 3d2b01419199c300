use mvp_webgpu::math::{self, Matrix4};
use mvp_webgpu::render::{Camera, TRIANGLE_VERTICES};

fn project(mvp: &Matrix4, p: [f32; 3]) -> [f32; 3] {
    let clip = math::transform_point(mvp, [p[0], p[1], p[2], 1.0]);
    [clip[0] / clip[3], clip[1] / clip[3], clip[2] / clip[3]]
}

#[test]
fn triangle_lands_inside_ndc() {
    let mvp = Camera::default().model_view_projection(&Matrix4::IDENTITY);

    for vertex in TRIANGLE_VERTICES {
        let [x, y, z] = project(&mvp, vertex.position);
        assert!((-1.0..=1.0).contains(&x), "{vertex:?} x = {x}");
        assert!((-1.0..=1.0).contains(&y), "{vertex:?} y = {y}");
        assert!((-1.0..=1.0).contains(&z), "{vertex:?} z = {z}");
    }
}

#[test]
fn triangle_keeps_its_orientation() {
    let mvp = Camera::default().model_view_projection(&Matrix4::IDENTITY);
    let top = project(&mvp, TRIANGLE_VERTICES[0].position);
    let right = project(&mvp, TRIANGLE_VERTICES[1].position);
    let left = project(&mvp, TRIANGLE_VERTICES[2].position);

    assert!(top[1] > right[1]);
    assert!(right[0] > 0.0 && left[0] < 0.0);
    assert!((right[0] + left[0]).abs() < 1e-5);
}

#[test]
fn in_place_chain_matches_operator_form() {
    let camera = Camera::default();
    let model = mvp_webgpu::Transform::from_position([0.5, 0.0, 0.0]).to_matrix();

    let mut mvp = math::create();
    math::multiply(&camera.projection_matrix(), &camera.view_matrix(), &mut mvp);
    math::multiply_assign(&mut mvp, &model);

    let expected = camera.projection_matrix() * camera.view_matrix() * model;
    assert_eq!(mvp, expected);
}

#[test]
fn identity_of_fresh_matrix_is_the_demo_model() {
    let model = *math::identity(&mut math::create());
    assert_eq!(model, Matrix4::IDENTITY);

    let camera = Camera::default();
    assert_eq!(
        camera.model_view_projection(&model),
        camera.view_projection()
    );
}
