use hypermaze_geom::{Aabb, Vec3};

/// One of the six axis-aligned faces of a cell, in display space.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    NegX = 0,
    PosX = 1,
    NegY = 2,
    PosY = 3,
    NegZ = 4,
    PosZ = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::NegX,
        Face::PosX,
        Face::NegY,
        Face::PosY,
        Face::NegZ,
        Face::PosZ,
    ];

    /// Display axis `[0..3)` this face is perpendicular to.
    #[inline]
    pub fn axis(self) -> usize {
        match self {
            Face::NegX | Face::PosX => 0,
            Face::NegY | Face::PosY => 1,
            Face::NegZ | Face::PosZ => 2,
        }
    }

    /// Step direction out of this face along its axis.
    #[inline]
    pub fn dir(self) -> i32 {
        match self {
            Face::NegX | Face::NegY | Face::NegZ => -1,
            Face::PosX | Face::PosY | Face::PosZ => 1,
        }
    }

    /// Outward unit normal.
    #[inline]
    pub fn normal(self) -> Vec3 {
        let mut n = Vec3::ZERO;
        match self.axis() {
            0 => n.x = self.dir() as f32,
            1 => n.y = self.dir() as f32,
            _ => n.z = self.dir() as f32,
        }
        n
    }

    /// The face's quad on box `b`, counter-clockwise seen from outside.
    #[inline]
    pub fn corners_of(self, b: Aabb) -> [Vec3; 4] {
        // Corner indices follow Aabb::corners (bit0 = +x, bit1 = +y, bit2 = +z).
        let ix: [usize; 4] = match self {
            Face::NegX => [0, 4, 6, 2],
            Face::PosX => [1, 3, 7, 5],
            Face::NegY => [0, 1, 5, 4],
            Face::PosY => [2, 6, 7, 3],
            Face::NegZ => [0, 2, 3, 1],
            Face::PosZ => [4, 5, 7, 6],
        };
        let c = b.corners();
        [c[ix[0]], c[ix[1]], c[ix[2]], c[ix[3]]]
    }
}
