use super::Vec3;

/// 4x4 transform matrix, column-major as WebGL expects
#[derive(Debug, Clone, Copy)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Mat4 {
    pub fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn translation(v: Vec3) -> Self {
        let mut m = Self::identity();
        m.data[12] = v.x;
        m.data[13] = v.y;
        m.data[14] = v.z;
        m
    }

    pub fn uniform_scale(s: f32) -> Self {
        let mut m = Self::identity();
        m.data[0] = s;
        m.data[5] = s;
        m.data[10] = s;
        m
    }

    pub fn rotation_x(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0,
                0.0, c, s, 0.0,
                0.0, -s, c, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn rotation_y(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self {
            data: [
                c, 0.0, -s, 0.0,
                0.0, 1.0, 0.0, 0.0,
                s, 0.0, c, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn rotation_z(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self {
            data: [
                c, s, 0.0, 0.0,
                -s, c, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Model matrix from translation, XYZ Euler rotation, and uniform scale.
    /// This is what each ornament instance uploads per frame.
    pub fn compose(translation: Vec3, euler: Vec3, scale: f32) -> Self {
        let rotation = Self::rotation_z(euler.z)
            .mul(&Self::rotation_y(euler.y))
            .mul(&Self::rotation_x(euler.x));
        Self::translation(translation)
            .mul(&rotation)
            .mul(&Self::uniform_scale(scale))
    }

    /// Perspective projection matrix
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();
        let nf = 1.0 / (near - far);

        Self {
            data: [
                f / aspect, 0.0, 0.0, 0.0,
                0.0, f, 0.0, 0.0,
                0.0, 0.0, (far + near) * nf, -1.0,
                0.0, 0.0, 2.0 * far * near * nf, 0.0,
            ],
        }
    }

    /// Look-at view matrix
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let f = (target - eye).normalize();
        let r = f.cross(&up).normalize();
        let u = r.cross(&f);

        Self {
            data: [
                r.x, u.x, -f.x, 0.0,
                r.y, u.y, -f.y, 0.0,
                r.z, u.z, -f.z, 0.0,
                -r.dot(&eye), -u.dot(&eye), f.dot(&eye), 1.0,
            ],
        }
    }

    /// Matrix multiplication
    pub fn mul(&self, other: &Mat4) -> Self {
        let mut result = [0.0f32; 16];

        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.data[row + k * 4] * other.data[k + col * 4];
                }
                result[row + col * 4] = sum;
            }
        }

        Self { data: result }
    }

    /// Transform a point (applies translation)
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            self.data[0] * p.x + self.data[4] * p.y + self.data[8] * p.z + self.data[12],
            self.data[1] * p.x + self.data[5] * p.y + self.data[9] * p.z + self.data[13],
            self.data[2] * p.x + self.data[6] * p.y + self.data[10] * p.z + self.data[14],
        )
    }

    /// Get as slice for WebGL upload
    pub fn as_slice(&self) -> &[f32; 16] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_leaves_points_alone() {
        let p = Vec3::new(1.0, -2.0, 3.0);
        let q = Mat4::identity().transform_point(p);
        assert!((q.x - p.x).abs() < 0.0001);
        assert!((q.y - p.y).abs() < 0.0001);
        assert!((q.z - p.z).abs() < 0.0001);
    }

    #[test]
    fn test_translation() {
        let m = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
        let result = m.transform_point(Vec3::ZERO);
        assert!((result.x - 1.0).abs() < 0.0001);
        assert!((result.y - 2.0).abs() < 0.0001);
        assert!((result.z - 3.0).abs() < 0.0001);
    }

    #[test]
    fn test_rotation_z_quarter_turn() {
        let m = Mat4::rotation_z(std::f32::consts::FRAC_PI_2);
        let result = m.transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert!(result.x.abs() < 0.0001);
        assert!((result.y - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_compose_order_scale_then_rotate_then_translate() {
        // A unit x point scaled by 2 then rotated 90deg about z lands on +y,
        // then the translation moves it
        let m = Mat4::compose(
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, std::f32::consts::FRAC_PI_2),
            2.0,
        );
        let result = m.transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert!((result.x - 10.0).abs() < 0.0001);
        assert!((result.y - 2.0).abs() < 0.0001);
        assert!(result.z.abs() < 0.0001);
    }

    #[test]
    fn test_mul_combines_transforms() {
        let t = Mat4::translation(Vec3::new(1.0, 0.0, 0.0));
        let s = Mat4::uniform_scale(2.0);
        let combined = t.mul(&s);
        let result = combined.transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert!((result.x - 3.0).abs() < 0.0001);
    }

    #[test]
    fn test_look_at_centers_target() {
        let view = Mat4::look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::UP);
        let result = view.transform_point(Vec3::ZERO);
        assert!(result.x.abs() < 0.0001);
        assert!(result.y.abs() < 0.0001);
        assert!((result.z + 10.0).abs() < 0.0001);
    }
}
