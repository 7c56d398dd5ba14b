use crate::prelude::*;

pub trait Material: Send + Sync {
    fn diffuse_color(&self) -> Color;

    fn specular_color(&self) -> Color;

    // zero or negative means opaque
    fn refraction_index(&self) -> f64;

    fn shade(&self, r_in: &Ray, hit: &Hit, dir_to_light: Vec3, light_color: Color) -> Color;
}

#[derive(Debug, Clone, Copy)]
pub struct Phong {
    diffuse: Color,
    specular: Color,
    shininess: f64,
    refraction_index: f64,
}

impl Phong {
    pub fn new(diffuse: Color, specular: Color, shininess: f64, refraction_index: f64) -> Self {
        Self {
            diffuse,
            specular,
            shininess,
            refraction_index,
        }
    }

    pub fn diffuse(diffuse: Color) -> Self {
        Self::new(diffuse, Color::zero(), 0.0, 0.0)
    }
}

impl Material for Phong {
    fn diffuse_color(&self) -> Color {
        self.diffuse
    }

    fn specular_color(&self) -> Color {
        self.specular
    }

    fn refraction_index(&self) -> f64 {
        self.refraction_index
    }

    fn shade(&self, r_in: &Ray, hit: &Hit, dir_to_light: Vec3, light_color: Color) -> Color {
        let lambert = dir_to_light.dot(hit.normal).max(0.0);
        let mut color = lambert * light_color * self.diffuse;

        let reflected = mirror_direction(hit.normal, r_in.dir);
        let highlight = dir_to_light.dot(reflected);
        if highlight > 0.0 {
            color += highlight.powf(self.shininess) * light_color * self.specular;
        }

        color
    }
}
