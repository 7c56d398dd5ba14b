use crate::prelude::*;

pub struct Plane {
    normal: Vec3,
    offset: f64,
    mat: Arc<dyn Material>,
}

impl Plane {
    pub fn new(normal: Vec3, offset: f64, mat: Arc<dyn Material>) -> Self {
        Self {
            normal: normal.normalized(),
            offset,
            mat,
        }
    }
}

impl Hittable for Plane {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<Hit> {
        let denom = self.normal.dot(r.dir);
        if denom == 0.0 {
            return None;
        }

        let t = (self.offset - self.normal.dot(r.orig)) / denom;
        if !ray_t.surrounds(t) {
            return None;
        }

        Some(Hit::new(t, self.normal, self.mat.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Plane {
        Plane::new(
            Vec3::new(0.0, 1.0, 0.0),
            -1.0,
            Arc::new(Phong::diffuse(Color::splat(0.5))),
        )
    }

    #[test]
    fn hits_from_either_side() {
        let p = floor();
        let down = Ray::new(Point3::zero(), Vec3::new(0.0, -1.0, 0.0));
        let hit = p.hit(&down, Interval::beyond(0.001)).unwrap();
        assert_eq!(hit.t, 1.0);
        assert_eq!(hit.normal, Vec3::new(0.0, 1.0, 0.0));

        let up = Ray::new(Point3::new(0.0, -3.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(p.hit(&up, Interval::beyond(0.001)).unwrap().t, 2.0);
    }

    #[test]
    fn parallel_or_behind_misses() {
        let p = floor();
        let parallel = Ray::new(Point3::zero(), Vec3::new(1.0, 0.0, 0.0));
        assert!(p.hit(&parallel, Interval::beyond(0.001)).is_none());

        let away = Ray::new(Point3::zero(), Vec3::new(0.0, 1.0, 0.0));
        assert!(p.hit(&away, Interval::beyond(0.001)).is_none());
    }
}
