use hypermaze_geom::{Aabb, Vec3};

use crate::face::Face;

/// Accumulates quads as flat vertex arrays: positions and normals (xyz per
/// vertex), colors (rgba f32 per vertex) and triangulated indices. One
/// batch is one draw call; regeneration replaces the whole batch.
#[derive(Default, Clone)]
pub struct QuadBatch {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub col: Vec<f32>,
    pub idx: Vec<u16>,
}

impl QuadBatch {
    /// Clears all arrays but retains capacity for reuse across rebuilds.
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.pos.clear();
        self.norm.clear();
        self.col.clear();
        self.idx.clear();
    }

    /// Pre-reserve for approximately `n_quads` quads worth of data.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        self.pos.reserve(n_quads * 4 * 3);
        self.norm.reserve(n_quads * 4 * 3);
        self.col.reserve(n_quads * 4 * 4);
        self.idx.reserve(n_quads * 6);
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.pos.len() / 12
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    /// Appends a flat-colored quad (two triangles).
    pub fn add_quad(&mut self, corners: [Vec3; 4], n: Vec3, rgba: [f32; 4]) {
        self.add_quad_colors(corners, n, [rgba; 4]);
    }

    /// Appends a quad with per-vertex colors. Winding is corrected against
    /// the supplied normal so back-face culling stays consistent.
    pub fn add_quad_colors(&mut self, corners: [Vec3; 4], n: Vec3, colors: [[f32; 4]; 4]) {
        let mut vs = corners;
        let mut cols = colors;
        let e1 = vs[1] - vs[0];
        let e2 = vs[2] - vs[1];
        if e1.cross(e2).dot(n) < 0.0 {
            vs.swap(1, 3);
            cols.swap(1, 3);
        }
        let base = self.vertex_count();
        debug_assert!(base + 4 <= u16::MAX as usize);
        let base = base as u16;
        for i in 0..4 {
            self.pos.extend_from_slice(&[vs[i].x, vs[i].y, vs[i].z]);
            self.norm.extend_from_slice(&[n.x, n.y, n.z]);
            self.col.extend_from_slice(&cols[i]);
        }
        self.idx
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Appends one face of an axis-aligned box, flat-colored.
    #[inline]
    pub fn add_box_face(&mut self, b: Aabb, face: Face, rgba: [f32; 4]) {
        self.add_quad(face.corners_of(b), face.normal(), rgba);
    }

    /// Appends box faces chosen by the closure: `None` skips the face,
    /// `Some(colors)` emits it with those per-vertex colors.
    pub fn add_box_faces(&mut self, b: Aabb, mut choose: impl FnMut(Face) -> Option<[[f32; 4]; 4]>) {
        for face in Face::ALL {
            if let Some(colors) = choose(face) {
                self.add_quad_colors(face.corners_of(b), face.normal(), colors);
            }
        }
    }
}
