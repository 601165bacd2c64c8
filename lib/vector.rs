//! Vectors that are either one value or a whole batch of values.
//!
//! Single points and directions are plain `glam::DVec3`. A `Vec3Batch` stores
//! N vectors as three parallel component arrays so one call can evaluate an
//! entire image's worth of rays. Both implement [`Vector3`], and every lane of
//! a batch is computed with exactly the same float operations as the single
//! value path, so tracing one ray or a batch of one gives identical bits.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use glam::DVec3;

use crate::error::TraceError;
use crate::mask::{self, assert_lanes};

/// Arithmetic shared by single vectors and batches.
pub trait Vector3: Clone {
    /// `f64` for a single vector, one `f64` per lane for a batch.
    type Lanes;

    fn lanes(&self) -> usize;
    fn dot(&self, other: &Self) -> Self::Lanes;
    fn norm(&self) -> Self::Lanes;
    fn scale(&self, s: f64) -> Self;

    /// Unit vector in the same direction. A zero-length entry is divided by 1
    /// instead of 0 and stays zero rather than turning into NaN.
    fn normalize(&self) -> Self;
}

fn safe_norm(norm: f64) -> f64 {
    if norm == 0.0 {
        1.0
    } else {
        norm
    }
}

impl Vector3 for DVec3 {
    type Lanes = f64;

    fn lanes(&self) -> usize {
        1
    }

    fn dot(&self, other: &Self) -> f64 {
        DVec3::dot(*self, *other)
    }

    fn norm(&self) -> f64 {
        DVec3::dot(*self, *self).sqrt()
    }

    fn scale(&self, s: f64) -> Self {
        *self * s
    }

    fn normalize(&self) -> Self {
        *self * (1.0 / safe_norm(Vector3::norm(self)))
    }
}

/// Structure-of-arrays batch of 3D vectors. All three component arrays always
/// have the same length.
///
/// There is intentionally no `PartialEq`: comparing two batches yields one
/// answer per lane, see [`Vec3Batch::eq_lanes`].
#[derive(Debug, Clone, Default)]
pub struct Vec3Batch {
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
}

impl Vec3Batch {
    pub fn from_components(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Result<Vec3Batch, TraceError> {
        if x.len() != y.len() || x.len() != z.len() {
            return Err(TraceError::ShapeMismatch { x: x.len(), y: y.len(), z: z.len() });
        }

        Ok(Vec3Batch { x, y, z })
    }

    /// The same vector repeated in every lane.
    pub fn splat(v: DVec3, lanes: usize) -> Vec3Batch {
        Vec3Batch { x: vec![v.x; lanes], y: vec![v.y; lanes], z: vec![v.z; lanes] }
    }

    pub fn zeros(lanes: usize) -> Vec3Batch {
        Vec3Batch::splat(DVec3::ZERO, lanes)
    }

    /// `v * s[i]` in lane `i`, e.g. a light color weighted per ray.
    pub fn from_scaled(v: DVec3, s: &[f64]) -> Vec3Batch {
        s.iter().map(|&s| v * s).collect()
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn z(&self) -> &[f64] {
        &self.z
    }

    pub fn get(&self, lane: usize) -> DVec3 {
        DVec3::new(self.x[lane], self.y[lane], self.z[lane])
    }

    pub fn iter(&self) -> impl Iterator<Item = DVec3> + '_ {
        (0..self.len()).map(move |i| self.get(i))
    }

    pub fn map(&self, f: impl Fn(DVec3) -> DVec3) -> Vec3Batch {
        self.iter().map(f).collect()
    }

    pub fn zip_map(&self, other: &Vec3Batch, f: impl Fn(DVec3, DVec3) -> DVec3) -> Vec3Batch {
        assert_lanes(self.len(), other.len());
        self.iter().zip(other.iter()).map(|(a, b)| f(a, b)).collect()
    }

    /// Multiplies lane `i` by `s[i]`.
    pub fn scale_lanes(&self, s: &[f64]) -> Vec3Batch {
        assert_lanes(self.len(), s.len());
        self.iter().zip(s).map(|(v, &s)| v * s).collect()
    }

    /// Keeps only the lanes where `mask` holds, in order.
    pub fn extract(&self, mask: &[bool]) -> Vec3Batch {
        assert_lanes(self.len(), mask.len());
        self.iter().zip(mask).filter(|(_, &m)| m).map(|(v, _)| v).collect()
    }

    /// Inverse of [`extract`](Self::extract): scatters this batch into the
    /// `true` positions of `mask`, zero everywhere else.
    pub fn place(&self, mask: &[bool]) -> Vec3Batch {
        assert_lanes(self.len(), mask::count(mask));

        let mut values = self.iter();
        mask.iter()
            .map(|&m| if m { values.next().unwrap_or(DVec3::ZERO) } else { DVec3::ZERO })
            .collect()
    }

    /// Lane-wise `if mask { a } else { b }`.
    pub fn select(mask: &[bool], a: &Vec3Batch, b: &Vec3Batch) -> Vec3Batch {
        assert_lanes(mask.len(), a.len());
        Vec3Batch {
            x: mask::select(mask, &a.x, &b.x),
            y: mask::select(mask, &a.y, &b.y),
            z: mask::select(mask, &a.z, &b.z),
        }
    }

    /// Zeroes every lane where `mask` is false.
    pub fn masked(&self, mask: &[bool]) -> Vec3Batch {
        Vec3Batch::select(mask, self, &Vec3Batch::zeros(self.len()))
    }

    /// Component-wise equality, one answer per lane.
    pub fn eq_lanes(&self, other: &Vec3Batch) -> Vec<bool> {
        assert_lanes(self.len(), other.len());
        self.iter().zip(other.iter()).map(|(a, b)| a == b).collect()
    }
}

impl FromIterator<DVec3> for Vec3Batch {
    fn from_iter<I: IntoIterator<Item = DVec3>>(iter: I) -> Self {
        let mut batch = Vec3Batch::default();
        for v in iter {
            batch.x.push(v.x);
            batch.y.push(v.y);
            batch.z.push(v.z);
        }
        batch
    }
}

impl From<DVec3> for Vec3Batch {
    fn from(v: DVec3) -> Self {
        Vec3Batch::splat(v, 1)
    }
}

impl Vector3 for Vec3Batch {
    type Lanes = Vec<f64>;

    fn lanes(&self) -> usize {
        self.len()
    }

    fn dot(&self, other: &Self) -> Vec<f64> {
        assert_lanes(self.len(), other.len());
        self.iter().zip(other.iter()).map(|(a, b)| a.dot(b)).collect()
    }

    fn norm(&self) -> Vec<f64> {
        self.iter().map(|v| Vector3::norm(&v)).collect()
    }

    fn scale(&self, s: f64) -> Self {
        self.map(|v| v * s)
    }

    fn normalize(&self) -> Self {
        self.map(|v| Vector3::normalize(&v))
    }
}

impl Add<&Vec3Batch> for &Vec3Batch {
    type Output = Vec3Batch;

    fn add(self, rhs: &Vec3Batch) -> Vec3Batch {
        self.zip_map(rhs, |a, b| a + b)
    }
}

impl Add for Vec3Batch {
    type Output = Vec3Batch;

    fn add(self, rhs: Vec3Batch) -> Vec3Batch {
        &self + &rhs
    }
}

impl Add<DVec3> for &Vec3Batch {
    type Output = Vec3Batch;

    fn add(self, rhs: DVec3) -> Vec3Batch {
        self.map(|a| a + rhs)
    }
}

impl Add<DVec3> for Vec3Batch {
    type Output = Vec3Batch;

    fn add(self, rhs: DVec3) -> Vec3Batch {
        &self + rhs
    }
}

impl AddAssign<&Vec3Batch> for Vec3Batch {
    fn add_assign(&mut self, rhs: &Vec3Batch) {
        *self = &*self + rhs;
    }
}

impl AddAssign for Vec3Batch {
    fn add_assign(&mut self, rhs: Vec3Batch) {
        *self += &rhs;
    }
}

impl Sub<&Vec3Batch> for &Vec3Batch {
    type Output = Vec3Batch;

    fn sub(self, rhs: &Vec3Batch) -> Vec3Batch {
        self.zip_map(rhs, |a, b| a - b)
    }
}

impl Sub for Vec3Batch {
    type Output = Vec3Batch;

    fn sub(self, rhs: Vec3Batch) -> Vec3Batch {
        &self - &rhs
    }
}

impl Sub<DVec3> for &Vec3Batch {
    type Output = Vec3Batch;

    fn sub(self, rhs: DVec3) -> Vec3Batch {
        self.map(|a| a - rhs)
    }
}

impl Sub<DVec3> for Vec3Batch {
    type Output = Vec3Batch;

    fn sub(self, rhs: DVec3) -> Vec3Batch {
        &self - rhs
    }
}

/// `point - batch`, e.g. the vector from every hit point toward the light.
impl Sub<&Vec3Batch> for DVec3 {
    type Output = Vec3Batch;

    fn sub(self, rhs: &Vec3Batch) -> Vec3Batch {
        rhs.map(|b| self - b)
    }
}

impl Mul<f64> for &Vec3Batch {
    type Output = Vec3Batch;

    fn mul(self, rhs: f64) -> Vec3Batch {
        self.scale(rhs)
    }
}

impl Mul<f64> for Vec3Batch {
    type Output = Vec3Batch;

    fn mul(self, rhs: f64) -> Vec3Batch {
        self.scale(rhs)
    }
}

impl Mul<&Vec3Batch> for f64 {
    type Output = Vec3Batch;

    fn mul(self, rhs: &Vec3Batch) -> Vec3Batch {
        rhs.scale(self)
    }
}

/// Component-wise product, used to tint colors.
impl Mul<&Vec3Batch> for &Vec3Batch {
    type Output = Vec3Batch;

    fn mul(self, rhs: &Vec3Batch) -> Vec3Batch {
        self.zip_map(rhs, |a, b| a * b)
    }
}

impl Mul<DVec3> for &Vec3Batch {
    type Output = Vec3Batch;

    fn mul(self, rhs: DVec3) -> Vec3Batch {
        self.map(|a| a * rhs)
    }
}

impl Div<f64> for &Vec3Batch {
    type Output = Vec3Batch;

    fn div(self, rhs: f64) -> Vec3Batch {
        self.map(|a| a / rhs)
    }
}

impl Div<f64> for Vec3Batch {
    type Output = Vec3Batch;

    fn div(self, rhs: f64) -> Vec3Batch {
        &self / rhs
    }
}

impl Neg for &Vec3Batch {
    type Output = Vec3Batch;

    fn neg(self) -> Vec3Batch {
        self.map(|a| -a)
    }
}

impl Neg for Vec3Batch {
    type Output = Vec3Batch;

    fn neg(self) -> Vec3Batch {
        -&self
    }
}
