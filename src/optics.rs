use crate::prelude::*;

pub fn mirror_direction(normal: Vec3, incoming: Vec3) -> Vec3 {
    debug_assert!(normal.is_unit());
    (incoming - 2.0 * incoming.dot(normal) * normal).normalized()
}

// normal must face the side the ray arrives from. None on total internal reflection.
pub fn transmitted_direction(
    normal: Vec3,
    incoming: Vec3,
    n_current: f64,
    n_entered: f64,
) -> Option<Vec3> {
    debug_assert!(normal.is_unit());
    debug_assert!(n_current > 0.0 && n_entered > 0.0);

    let d_n = normal.dot(incoming);
    let eta = n_current / n_entered;
    let discriminant = 1.0 - eta * eta * (1.0 - d_n * d_n);
    if discriminant < 0.0 {
        return None;
    }

    let transmitted = eta * (incoming - normal * d_n) - normal * discriminant.sqrt();
    Some(transmitted.normalized())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FresnelWeights {
    pub reflect: f64,
    pub refract: f64,
}

impl FresnelWeights {
    pub fn schlick(incoming: Vec3, normal: Vec3, n_current: f64, n_entered: f64) -> Self {
        let r0 = ((n_entered - n_current) / (n_entered + n_current)).powi(2);
        let cos = incoming.dot(normal).abs();
        let reflect = r0 + (1.0 - r0) * (1.0 - cos).powi(5);
        Self {
            reflect,
            refract: 1.0 - reflect,
        }
    }

    pub fn blend(&self, reflected: Color, refracted: Color) -> Color {
        self.reflect * reflected + self.refract * refracted
    }
}
