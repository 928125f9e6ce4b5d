//! Named-field views of vectors.
//!
//! `Vector` stores its elements as a plain array, but graphics code wants to write
//! `v.x` and `v.y`. The `Deref`/`DerefMut` impls below reinterpret the array as a
//! `#[repr(C)]` struct of the same layout, so the named fields and the indexed view are
//! always two windows onto the same storage.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

#[repr(C)]
pub struct XY {
    pub x: f32,
    pub y: f32,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZW {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
    _priv: (), // prevent external construction
}

impl Deref for Vector<2> {
    type Target = XY;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl DerefMut for Vector<2> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl Deref for Vector<3> {
    type Target = XYZ;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl DerefMut for Vector<3> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl Deref for Vector<4> {
    type Target = XYZW;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl DerefMut for Vector<4> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}
