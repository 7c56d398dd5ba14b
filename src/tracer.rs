use crate::prelude::*;

// Keeps secondary rays from re-hitting the surface they start on.
pub const EPSILON: f64 = 0.001;

pub struct RayTracer<'a> {
    scene: &'a Scene,
    max_bounces: u32,
    shadows: bool,
}

impl<'a> RayTracer<'a> {
    pub fn new(scene: &'a Scene, max_bounces: u32, shadows: bool) -> Self {
        Self {
            scene,
            max_bounces,
            shadows,
        }
    }

    // refr_index is the medium r travels through, 1.0 for primary rays.
    pub fn trace_ray(&self, r: &Ray, t_min: f64, bounces: u32, refr_index: f64) -> Color {
        if bounces > self.max_bounces {
            return Color::zero();
        }

        let Some(hit) = self.scene.group().hit(r, Interval::beyond(t_min)) else {
            return self.scene.background_color(r.dir);
        };

        let mat = hit.mat.as_ref();
        let hit_point = r.at(hit.t);
        let mut color = self.scene.ambient_light() * mat.diffuse_color();

        for light in self.scene.lights() {
            let ill = light.illuminate(hit_point);

            if self.shadows {
                let shadow_ray = Ray::new(hit_point, ill.direction);
                let unoccluded = Interval::new(t_min + EPSILON, ill.distance - EPSILON);
                if self.scene.group().hit_any(&shadow_ray, unoccluded) {
                    continue;
                }
            }

            color += mat.shade(r, &hit, ill.direction, ill.color);
        }

        let ks = mat.specular_color();
        let mut reflect_color = Color::zero();
        if ks.all_positive() {
            let reflect_dir = mirror_direction(hit.normal, r.dir);
            let reflected = Ray::new(hit_point, reflect_dir);
            reflect_color =
                ks * self.trace_ray(&reflected, t_min + EPSILON, bounces + 1, refr_index);
        }

        let index = mat.refraction_index();
        if index > 0.0 {
            // Leaving the object: face the normal back at the ray, exit into air.
            let (normal, n_entered) = if r.dir.dot(hit.normal) > 0.0 {
                (-hit.normal, 1.0)
            } else {
                (hit.normal, index)
            };

            if let Some(refract_dir) = transmitted_direction(normal, r.dir, refr_index, n_entered)
            {
                let refracted = Ray::new(hit_point, refract_dir);
                let refract_color =
                    ks * self.trace_ray(&refracted, t_min + EPSILON, bounces + 1, n_entered);

                let weights = FresnelWeights::schlick(r.dir, normal, refr_index, n_entered);
                return color + weights.blend(reflect_color, refract_color);
            }
            // Total internal reflection: refraction adds nothing and the
            // reflection term stays unweighted.
        }

        color + reflect_color
    }
}
