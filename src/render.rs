use crate::config::{DepthOutput, RenderConfig};
use crate::image::Image;
use crate::prelude::*;
use crate::tracer::RayTracer;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct RenderOutput {
    pub color: Image,
    pub depth: Option<Image>,
    pub normals: Option<Image>,
}

pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> RenderOutput {
    let tracer = RayTracer::new(scene, config.max_bounces, config.shadows);
    let factor = config.supersampling();
    let width = config.width * factor;
    let height = config.height * factor;
    let step = 1.0 / factor as f64;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut color = Image::new(width, height);
    let mut depth = config.depth.as_ref().map(|_| Image::new(width, height));
    let mut normals = config.normals.as_ref().map(|_| Image::new(width, height));

    info!(
        "rendering {}x{} ({} samples per pixel), {} bounces, shadows {}",
        config.width,
        config.height,
        factor * factor,
        config.max_bounces,
        if config.shadows { "on" } else { "off" }
    );

    for j in 0..height {
        if j % 50 == 0 {
            debug!("scanlines remaining: {}", height - j);
        }

        for i in 0..width {
            // Sub-pixel position inside the final pixel grid.
            let (dx, dy) = if config.jitter {
                (rng.random::<f64>(), rng.random::<f64>())
            } else {
                (0.5, 0.5)
            };
            let x = (i as f64 + dx) * step;
            let y = (j as f64 + dy) * step;

            let r = camera.get_ray(x, y);
            color.set(i, j, tracer.trace_ray(&r, camera.t_min, 0, 1.0));

            if depth.is_some() || normals.is_some() {
                let hit = scene.group().hit(&r, Interval::beyond(camera.t_min));
                if let (Some(img), Some(range)) = (depth.as_mut(), config.depth.as_ref()) {
                    let t = hit.as_ref().map_or(INFINITY, |h| h.t);
                    img.set(i, j, Color::splat(depth_shade(t, range)));
                }
                if let Some(img) = normals.as_mut() {
                    let n = hit.as_ref().map_or(Vec3::zero(), |h| h.normal.abs());
                    img.set(i, j, n);
                }
            }
        }
    }

    if config.filter {
        debug!("applying gaussian filter");
        color = color.gaussian_blur();
    }

    RenderOutput {
        color: color.downsample(factor),
        depth: depth.map(|img| img.downsample(factor)),
        normals: normals.map(|img| img.downsample(factor)),
    }
}

fn depth_shade(t: f64, range: &DepthOutput) -> f64 {
    let clamped = Interval::new(range.min, range.max).clamp(t);
    (range.max - clamped) / (range.max - range.min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn single_sphere() -> (Camera, Scene) {
        // Odd dimensions so pixel (4, 3) is the exact image center.
        let camera = Camera::new(
            9,
            7,
            60.0,
            Point3::zero(),
            Point3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        let mut list = HittableList::new();
        list.add(Arc::new(Sphere::new(
            Point3::new(0.0, 0.0, -5.0),
            1.0,
            Arc::new(Phong::diffuse(Color::new(1.0, 0.0, 0.0))),
        )));
        let mut scene = Scene::new(
            Box::new(list),
            Color::splat(0.2),
            Background::Solid(Color::new(0.0, 0.0, 1.0)),
        );
        scene.add_light(Arc::new(DirectionalLight::new(
            Vec3::new(0.0, 0.0, -1.0),
            Color::splat(1.0),
        )));
        (camera, scene)
    }

    fn small_config() -> RenderConfig {
        RenderConfig {
            width: 9,
            height: 7,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn center_hits_sphere_and_corner_sees_background() {
        let (camera, scene) = single_sphere();
        let out = render(&camera, &scene, &small_config());

        assert_eq!((out.color.width(), out.color.height()), (9, 7));
        let center = out.color.get(4, 3);
        assert!(center.x > 0.2 && center.z == 0.0);
        assert_eq!(out.color.get(0, 0), Color::new(0.0, 0.0, 1.0));
        assert!(out.depth.is_none() && out.normals.is_none());
    }

    #[test]
    fn jittered_render_is_reproducible_per_seed() {
        let (camera, scene) = single_sphere();
        let config = RenderConfig {
            jitter: true,
            filter: true,
            seed: 42,
            ..small_config()
        };
        let a = render(&camera, &scene, &config);
        let b = render(&camera, &scene, &config);
        assert_eq!(a.color, b.color);
        assert_eq!((a.color.width(), a.color.height()), (9, 7));
    }

    #[test]
    fn auxiliary_passes_follow_the_primary_hit() {
        let (camera, scene) = single_sphere();
        let config = RenderConfig {
            depth: Some(DepthOutput {
                path: PathBuf::from("depth.ppm"),
                min: 3.0,
                max: 6.0,
            }),
            normals: Some(PathBuf::from("normals.ppm")),
            ..small_config()
        };
        let out = render(&camera, &scene, &config);

        let depth = out.depth.unwrap();
        assert!(depth.get(4, 3).x > 0.0);
        assert_eq!(depth.get(0, 0), Color::zero());

        // Center ray hits the sphere head on.
        let normals = out.normals.unwrap();
        assert!((normals.get(4, 3) - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-9);
        assert_eq!(normals.get(0, 0), Color::zero());
    }

    #[test]
    fn depth_shade_maps_range_to_unit() {
        let range = DepthOutput {
            path: PathBuf::new(),
            min: 2.0,
            max: 4.0,
        };
        assert_eq!(depth_shade(1.0, &range), 1.0);
        assert_eq!(depth_shade(3.0, &range), 0.5);
        assert_eq!(depth_shade(INFINITY, &range), 0.0);
    }
}
