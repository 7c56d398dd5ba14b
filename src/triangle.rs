use crate::prelude::*;

pub struct Triangle {
    a: Point3,
    edge1: Vec3,
    edge2: Vec3,
    normal: Vec3,
    mat: Arc<dyn Material>,
}

impl Triangle {
    pub fn new(a: Point3, b: Point3, c: Point3, mat: Arc<dyn Material>) -> Self {
        let edge1 = b - a;
        let edge2 = c - a;
        Self {
            a,
            edge1,
            edge2,
            normal: edge1.cross(edge2).normalized(),
            mat,
        }
    }
}

impl Hittable for Triangle {
    // Moller-Trumbore.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<Hit> {
        let pvec = r.dir.cross(self.edge2);
        let det = self.edge1.dot(pvec);
        if det.abs() < 1e-12 {
            return None;
        }
        let inv_det = 1.0 / det;

        let tvec = r.orig - self.a;
        let u = tvec.dot(pvec) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let qvec = tvec.cross(self.edge1);
        let v = r.dir.dot(qvec) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = self.edge2.dot(qvec) * inv_det;
        if !ray_t.surrounds(t) {
            return None;
        }

        Some(Hit::new(t, self.normal, self.mat.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xy_triangle() -> Triangle {
        Triangle::new(
            Point3::new(-1.0, -1.0, -2.0),
            Point3::new(1.0, -1.0, -2.0),
            Point3::new(0.0, 1.0, -2.0),
            Arc::new(Phong::diffuse(Color::splat(0.5))),
        )
    }

    #[test]
    fn hit_inside_reports_geometric_normal() {
        let tri = xy_triangle();
        let r = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));
        let hit = tri.hit(&r, Interval::beyond(0.001)).unwrap();
        assert!((hit.t - 2.0).abs() < 1e-12);
        assert_eq!(hit.normal, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn outside_edges_misses() {
        let tri = xy_triangle();
        let r = Ray::new(Point3::new(2.0, 0.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(tri.hit(&r, Interval::beyond(0.001)).is_none());
    }
}
