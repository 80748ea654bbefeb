pub const MEASUREMENT_PLANE_FT: f64 = 50.0; // y where vx0/vy0/vz0 are reported
pub const MOUND_TO_PLATE_FT: f64 = 60.5;
pub const PLATE_DEPTH_FT: f64 = 17.0 / 12.0;

/// Raw trajectory fit for one pitch, sampled at the measurement plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PitchKinematics {
    pub vx0: f64,
    pub vy0: f64,
    pub vz0: f64,
    pub ax: f64,
    pub ay: f64,
    pub az: f64,
    pub release_extension: f64,
    pub release_pos_x: f64,
    pub release_pos_z: f64,
    pub plate_z: f64,
}

/// Longitudinal velocity and elapsed time once the ball has covered `distance` along y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LongitudinalState {
    pub vy: f64,
    pub t: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    TowardPlate,
    BackToRelease,
}

/// Solves `vy^2 = vy0^2 - 2*ay*d` on the negative root (the ball moves toward -y).
///
/// A negative radicand yields NaN in both fields; callers filter on the final angle.
pub fn solve_longitudinal(vy0: f64, ay: f64, distance_ft: f64) -> LongitudinalState {
    let vy = -(vy0 * vy0 - 2.0 * ay * distance_ft).sqrt();
    let t = (vy - vy0) / ay;
    LongitudinalState { vy, t }
}

pub fn transverse_velocity(v0: f64, a: f64, state: LongitudinalState, direction: Direction) -> f64 {
    match direction {
        Direction::TowardPlate => v0 + a * state.t,
        Direction::BackToRelease => v0 - a * state.t,
    }
}

pub fn release_distance_ft(release_extension: f64) -> f64 {
    MOUND_TO_PLATE_FT - release_extension - MEASUREMENT_PLANE_FT
}

pub fn vertical_approach_angle(pitch: &PitchKinematics) -> f64 {
    let state = solve_longitudinal(
        pitch.vy0,
        pitch.ay,
        MEASUREMENT_PLANE_FT - PLATE_DEPTH_FT,
    );
    let vz_f = transverse_velocity(pitch.vz0, pitch.az, state, Direction::TowardPlate);
    let approach_deg = vz_f.atan2(state.vy).to_degrees();
    -(180.0 + approach_deg)
}

fn release_angle(state: LongitudinalState, transverse: f64, offset_ft: f64) -> f64 {
    -((transverse + offset_ft) / state.vy).atan().to_degrees()
}

pub fn vertical_release_angle(pitch: &PitchKinematics) -> f64 {
    let state = solve_longitudinal(
        pitch.vy0,
        pitch.ay,
        release_distance_ft(pitch.release_extension),
    );
    let vz_s = transverse_velocity(pitch.vz0, pitch.az, state, Direction::BackToRelease);
    release_angle(state, vz_s, pitch.release_pos_z - pitch.plate_z)
}

pub fn horizontal_release_angle(pitch: &PitchKinematics) -> f64 {
    let state = solve_longitudinal(
        pitch.vy0,
        pitch.ay,
        release_distance_ft(pitch.release_extension),
    );
    let vx_s = transverse_velocity(pitch.vx0, pitch.ax, state, Direction::BackToRelease);
    release_angle(state, vx_s, pitch.release_pos_x)
}

/// All angles in degrees. A descending pitch has a negative `vaa`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PitchAngles {
    pub vaa: f64,
    pub vra: f64,
    pub hra: f64,
}

impl PitchAngles {
    pub fn compute(pitch: &PitchKinematics) -> Self {
        Self {
            vaa: vertical_approach_angle(pitch),
            vra: vertical_release_angle(pitch),
            hra: horizontal_release_angle(pitch),
        }
    }

    pub fn is_plottable(&self) -> bool {
        !self.vra.is_nan() && !self.hra.is_nan()
    }
}
