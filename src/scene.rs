use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Background {
    Solid(Color),
    Gradient { horizon: Color, zenith: Color },
}

impl Background {
    pub fn color(&self, direction: Vec3) -> Color {
        match *self {
            Background::Solid(color) => color,
            Background::Gradient { horizon, zenith } => {
                let unit_direction = direction.normalized();
                let a = 0.5 * (unit_direction.y + 1.0);
                (1.0 - a) * horizon + a * zenith
            }
        }
    }
}

pub struct Scene {
    group: Box<dyn Hittable>,
    lights: Vec<Arc<dyn Light>>,
    ambient_light: Color,
    background: Background,
}

impl Scene {
    pub fn new(group: Box<dyn Hittable>, ambient_light: Color, background: Background) -> Self {
        Self {
            group,
            lights: Vec::new(),
            ambient_light,
            background,
        }
    }

    pub fn add_light(&mut self, light: Arc<dyn Light>) {
        self.lights.push(light);
    }

    pub fn group(&self) -> &dyn Hittable {
        self.group.as_ref()
    }

    pub fn lights(&self) -> &[Arc<dyn Light>] {
        &self.lights
    }

    pub fn ambient_light(&self) -> Color {
        self.ambient_light
    }

    pub fn background_color(&self, direction: Vec3) -> Color {
        self.background.color(direction)
    }
}
