use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Illumination {
    pub direction: Vec3,
    pub color: Color,
    pub distance: f64,
}

pub trait Light: Send + Sync {
    fn illuminate(&self, p: Point3) -> Illumination;
}

pub struct DirectionalLight {
    direction: Vec3,
    color: Color,
}

impl DirectionalLight {
    // direction is the way the light travels
    pub fn new(direction: Vec3, color: Color) -> Self {
        Self {
            direction: direction.normalized(),
            color,
        }
    }
}

impl Light for DirectionalLight {
    fn illuminate(&self, _p: Point3) -> Illumination {
        Illumination {
            direction: -self.direction,
            color: self.color,
            distance: INFINITY,
        }
    }
}

pub struct PointLight {
    position: Point3,
    color: Color,
    falloff: f64,
}

impl PointLight {
    pub fn new(position: Point3, color: Color, falloff: f64) -> Self {
        Self {
            position,
            color,
            falloff,
        }
    }
}

impl Light for PointLight {
    fn illuminate(&self, p: Point3) -> Illumination {
        let to_light = self.position - p;
        let distance = to_light.length();
        Illumination {
            direction: to_light / distance,
            color: self.color / (1.0 + self.falloff * distance * distance),
            distance,
        }
    }
}
