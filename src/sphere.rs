use crate::prelude::*;

pub struct Sphere {
    center: Point3,
    radius: f64,
    mat: Arc<dyn Material>,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64, mat: Arc<dyn Material>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            mat,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<Hit> {
        let oc = self.center - r.orig;
        let a = r.dir.length_squared();
        let h = r.dir.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        // Nearest root in range; the far one counts when starting inside.
        let mut root = (h - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let outward_normal = (r.at(root) - self.center) / self.radius;
        Some(Hit::new(root, outward_normal, self.mat.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere_at(z: f64) -> Sphere {
        Sphere::new(
            Point3::new(0.0, 0.0, z),
            1.0,
            Arc::new(Phong::diffuse(Color::splat(0.5))),
        )
    }

    #[test]
    fn hit_from_outside_reports_front_surface() {
        let s = unit_sphere_at(-3.0);
        let r = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));
        let hit = s.hit(&r, Interval::beyond(0.001)).unwrap();
        assert!((hit.t - 2.0).abs() < 1e-12);
        assert_eq!(hit.normal, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn hit_from_inside_keeps_outward_normal() {
        let s = unit_sphere_at(0.0);
        let r = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));
        let hit = s.hit(&r, Interval::beyond(0.001)).unwrap();
        assert!((hit.t - 1.0).abs() < 1e-12);
        // Outward normal points the same way as the ray.
        assert!(hit.normal.dot(r.dir) > 0.0);
    }

    #[test]
    fn miss_and_out_of_range() {
        let s = unit_sphere_at(-3.0);
        let sideways = Ray::new(Point3::zero(), Vec3::new(1.0, 0.0, 0.0));
        assert!(s.hit(&sideways, Interval::beyond(0.001)).is_none());

        let r = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));
        assert!(s.hit(&r, Interval::new(0.001, 1.5)).is_none());
    }
}
