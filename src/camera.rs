use crate::prelude::*;

pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    pub t_min: f64,

    center: Point3,
    pixel00_loc: Point3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
}

impl Camera {
    pub fn new(
        image_width: u32,
        image_height: u32,
        vfov: f64,
        lookfrom: Point3,
        lookat: Point3,
        vup: Vec3,
    ) -> Self {
        let mut cam = Self {
            image_width,
            image_height,
            t_min: 0.001,
            center: lookfrom,
            pixel00_loc: Point3::default(),
            pixel_delta_u: Vec3::default(),
            pixel_delta_v: Vec3::default(),
        };
        cam.initialize(vfov, lookat, vup);
        cam
    }

    fn initialize(&mut self, vfov: f64, lookat: Point3, vup: Vec3) {
        let focal_length = (self.center - lookat).length();
        let h = (degrees_to_radians(vfov) / 2.0).tan();
        let viewport_height = 2.0 * h * focal_length;
        let viewport_width =
            viewport_height * ((self.image_width as f64) / (self.image_height as f64));

        // Orthonormal camera basis; w points away from the view direction.
        let w = (self.center - lookat).normalized();
        let u = vup.cross(w).normalized();
        let v = w.cross(u);

        let viewport_u = viewport_width * u;
        let viewport_v = viewport_height * -v;

        self.pixel_delta_u = viewport_u / (self.image_width as f64);
        self.pixel_delta_v = viewport_v / (self.image_height as f64);

        let viewport_upper_left =
            self.center - focal_length * w - viewport_u / 2.0 - viewport_v / 2.0;
        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);
    }

    // (i + 0.5, j + 0.5) is the center of pixel (i, j)
    pub fn get_ray(&self, x: f64, y: f64) -> Ray {
        let pixel_sample = self.pixel00_loc
            + ((x - 0.5) * self.pixel_delta_u)
            + ((y - 0.5) * self.pixel_delta_v);
        Ray::new(self.center, (pixel_sample - self.center).normalized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn looking_down_z(width: u32, height: u32) -> Camera {
        Camera::new(
            width,
            height,
            90.0,
            Point3::zero(),
            Point3::new(0.0, 0.0, -1.0),
            Vec3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn image_center_looks_at_target() {
        let cam = looking_down_z(100, 50);
        let r = cam.get_ray(50.0, 25.0);
        assert_eq!(r.orig, Point3::zero());
        assert!((r.dir - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-12);
    }

    #[test]
    fn corners_span_the_field_of_view() {
        let cam = looking_down_z(100, 100);
        // 90 degree fov: top-left corner is at 45 degrees on both axes.
        let r = cam.get_ray(0.0, 0.0);
        let expected = Vec3::new(-1.0, 1.0, -1.0).normalized();
        assert!((r.dir - expected).length() < 1e-9);
        assert!(r.dir.is_unit());
    }
}
