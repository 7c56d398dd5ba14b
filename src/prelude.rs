pub use crate::camera::Camera;
pub use crate::color::{Color, write_color};
pub use crate::hittable::{Hit, Hittable};
pub use crate::hittable_list::HittableList;
pub use crate::interval::Interval;
pub use crate::light::{DirectionalLight, Illumination, Light, PointLight};
pub use crate::material::{Material, Phong};
pub use crate::optics::{FresnelWeights, mirror_direction, transmitted_direction};
pub use crate::plane::Plane;
pub use crate::ray::Ray;
pub use crate::scene::{Background, Scene};
pub use crate::sphere::Sphere;
pub use crate::triangle::Triangle;
pub use crate::vec3::{Point3, Vec3};

pub use std::sync::Arc;

pub const INFINITY: f64 = f64::INFINITY;
pub const PI: f64 = std::f64::consts::PI;

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}
