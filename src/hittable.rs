use crate::prelude::*;

// Normals are outward and never flipped towards the ray; the shader decides
// whether the ray is entering or leaving.
#[derive(Clone)]
pub struct Hit {
    pub t: f64,
    pub normal: Vec3,
    pub mat: Arc<dyn Material>,
}

impl Hit {
    pub fn new(t: f64, normal: Vec3, mat: Arc<dyn Material>) -> Self {
        Self { t, normal, mat }
    }
}

pub trait Hittable: Send + Sync {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<Hit>;

    fn hit_any(&self, r: &Ray, ray_t: Interval) -> bool {
        self.hit(r, ray_t).is_some()
    }
}
