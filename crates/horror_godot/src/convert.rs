//! Godot ↔ bevy math conversions
//!
//! Godot `Basis` хранит строки (`rows`), glam `Mat3` — столбцы.

use bevy::prelude::{Mat3, Vec2, Vec3};
use godot::prelude::{Basis, Vector2, Vector3};

pub fn to_vec3(v: Vector3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

pub fn to_vector3(v: Vec3) -> Vector3 {
    Vector3::new(v.x, v.y, v.z)
}

pub fn to_vec2(v: Vector2) -> Vec2 {
    Vec2::new(v.x, v.y)
}

pub fn to_mat3(basis: Basis) -> Mat3 {
    Mat3::from_cols(
        to_vec3(basis.rows[0]),
        to_vec3(basis.rows[1]),
        to_vec3(basis.rows[2]),
    )
    .transpose()
}
