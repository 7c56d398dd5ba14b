use crate::error::RenderError;
use crate::prelude::*;

pub const NAMES: [&str; 3] = ["spheres", "glass", "mirrors"];

pub fn build(name: &str, width: u32, height: u32) -> Result<(Camera, Scene), RenderError> {
    match name {
        "spheres" => Ok(spheres(width, height)),
        "glass" => Ok(glass(width, height)),
        "mirrors" => Ok(mirrors(width, height)),
        other => Err(RenderError::UnknownScene(other.to_string())),
    }
}

fn sky() -> Background {
    Background::Gradient {
        horizon: Color::new(1.0, 1.0, 1.0),
        zenith: Color::new(0.5, 0.7, 1.0),
    }
}

fn floor(mat: Arc<dyn Material>) -> Arc<dyn Hittable> {
    Arc::new(Plane::new(Vec3::new(0.0, 1.0, 0.0), 0.0, mat))
}

fn spheres(width: u32, height: u32) -> (Camera, Scene) {
    let camera = Camera::new(
        width,
        height,
        35.0,
        Point3::new(0.0, 3.0, 12.0),
        Point3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    );

    let mut world = HittableList::new();
    world.add(floor(Arc::new(Phong::diffuse(Color::splat(0.6)))));

    let palette = [
        Color::new(0.8, 0.2, 0.2),
        Color::new(0.2, 0.7, 0.3),
        Color::new(0.2, 0.3, 0.8),
    ];
    for (k, albedo) in palette.into_iter().enumerate() {
        let x = (k as f64 - 1.0) * 2.5;
        world.add(Arc::new(Sphere::new(
            Point3::new(x, 1.0, 0.0),
            1.0,
            Arc::new(Phong::new(albedo, Color::splat(0.3), 20.0, 0.0)),
        )));
    }

    let mut scene = Scene::new(Box::new(world), Color::splat(0.1), sky());
    scene.add_light(Arc::new(DirectionalLight::new(
        Vec3::new(-0.5, -1.0, -0.6),
        Color::splat(0.9),
    )));
    scene.add_light(Arc::new(PointLight::new(
        Point3::new(4.0, 6.0, 6.0),
        Color::splat(0.6),
        0.01,
    )));
    (camera, scene)
}

fn glass(width: u32, height: u32) -> (Camera, Scene) {
    let camera = Camera::new(
        width,
        height,
        40.0,
        Point3::new(0.0, 2.0, 10.0),
        Point3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    );

    let mut world = HittableList::new();
    world.add(floor(Arc::new(Phong::diffuse(Color::splat(0.5)))));

    // Backdrop wall of alternating triangles.
    let warm: Arc<dyn Material> = Arc::new(Phong::diffuse(Color::new(0.9, 0.5, 0.1)));
    let cool: Arc<dyn Material> = Arc::new(Phong::diffuse(Color::new(0.1, 0.4, 0.9)));
    for k in 0..6 {
        let x0 = -6.0 + 2.0 * k as f64;
        let x1 = x0 + 2.0;
        let z = -4.0;
        let (first, second) = if k % 2 == 0 {
            (warm.clone(), cool.clone())
        } else {
            (cool.clone(), warm.clone())
        };
        world.add(Arc::new(Triangle::new(
            Point3::new(x0, 0.0, z),
            Point3::new(x1, 0.0, z),
            Point3::new(x1, 4.0, z),
            first,
        )));
        world.add(Arc::new(Triangle::new(
            Point3::new(x0, 0.0, z),
            Point3::new(x1, 4.0, z),
            Point3::new(x0, 4.0, z),
            second,
        )));
    }

    let glass: Arc<dyn Material> = Arc::new(Phong::new(
        Color::splat(0.05),
        Color::splat(0.9),
        60.0,
        1.5,
    ));
    world.add(Arc::new(Sphere::new(Point3::new(0.0, 1.2, 1.0), 1.2, glass)));

    let mut scene = Scene::new(Box::new(world), Color::splat(0.15), sky());
    scene.add_light(Arc::new(PointLight::new(
        Point3::new(3.0, 7.0, 5.0),
        Color::splat(1.0),
        0.005,
    )));
    (camera, scene)
}

fn mirrors(width: u32, height: u32) -> (Camera, Scene) {
    let camera = Camera::new(
        width,
        height,
        50.0,
        Point3::new(1.5, 2.5, 7.0),
        Point3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    );

    let mirror: Arc<dyn Material> = Arc::new(Phong::new(
        Color::splat(0.02),
        Color::splat(0.85),
        100.0,
        0.0,
    ));

    let mut world = HittableList::new();
    world.add(floor(Arc::new(Phong::diffuse(Color::new(0.4, 0.4, 0.35)))));
    world.add(Arc::new(Plane::new(Vec3::new(1.0, 0.0, 0.0), -4.0, mirror.clone())));
    world.add(Arc::new(Plane::new(Vec3::new(-1.0, 0.0, 0.0), -4.0, mirror)));
    world.add(Arc::new(Sphere::new(
        Point3::new(0.0, 1.0, 0.0),
        1.0,
        Arc::new(Phong::new(
            Color::new(0.9, 0.8, 0.2),
            Color::splat(0.4),
            30.0,
            0.0,
        )),
    )));

    let mut scene = Scene::new(Box::new(world), Color::splat(0.1), sky());
    scene.add_light(Arc::new(DirectionalLight::new(
        Vec3::new(0.3, -1.0, -0.4),
        Color::splat(0.8),
    )));
    (camera, scene)
}
