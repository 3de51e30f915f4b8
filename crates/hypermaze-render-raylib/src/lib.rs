//! Raylib-based rendering utilities: batch upload and conversions.
// Unsafe is required for Raylib mesh upload operations in this crate.

use hypermaze_mesh::QuadBatch;
use raylib::prelude::*;

pub mod conv {
    use hypermaze_geom::Vec3;

    pub fn vec3_to_rl(v: Vec3) -> raylib::prelude::Vector3 {
        raylib::prelude::Vector3::new(v.x, v.y, v.z)
    }

    pub fn vec3_from_rl(v: raylib::prelude::Vector3) -> Vec3 {
        Vec3 {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

/// A batch uploaded to the GPU, ready to draw as one model.
pub struct BatchRender {
    pub model: Model,
    pub quads: usize,
}

/// Uploads a quad batch as a raylib mesh/model. Returns `None` for an
/// empty batch (nothing to draw). Colors are converted f32 -> u8 here;
/// everything upstream of this call stays in normalized floats.
pub fn upload_quad_batch(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    batch: &QuadBatch,
) -> Option<BatchRender> {
    let v_count = batch.vertex_count();
    if v_count == 0 {
        return None;
    }
    let quads = batch.quad_count();
    let mut raw: raylib::ffi::Mesh = unsafe { std::mem::zeroed() };
    raw.vertexCount = v_count as i32;
    raw.triangleCount = (quads * 2) as i32;
    unsafe {
        let vbytes = (v_count * 3 * std::mem::size_of::<f32>()) as u32;
        let nbytes = (v_count * 3 * std::mem::size_of::<f32>()) as u32;
        let cbytes = (v_count * 4 * std::mem::size_of::<u8>()) as u32;
        let ibytes = (quads * 6 * std::mem::size_of::<u16>()) as u32;
        raw.vertices = raylib::ffi::MemAlloc(vbytes) as *mut f32;
        raw.normals = raylib::ffi::MemAlloc(nbytes) as *mut f32;
        raw.colors = raylib::ffi::MemAlloc(cbytes) as *mut u8;
        raw.indices = raylib::ffi::MemAlloc(ibytes) as *mut u16;
        std::ptr::copy_nonoverlapping(batch.pos.as_ptr(), raw.vertices, v_count * 3);
        std::ptr::copy_nonoverlapping(batch.norm.as_ptr(), raw.normals, v_count * 3);
        for (i, c) in batch.col.iter().enumerate() {
            *raw.colors.add(i) = (c.clamp(0.0, 1.0) * 255.0) as u8;
        }
        std::ptr::copy_nonoverlapping(batch.idx.as_ptr(), raw.indices, quads * 6);
    }
    let mut mesh = unsafe { raylib::core::models::Mesh::from_raw(raw) };
    unsafe {
        mesh.upload(false);
    }
    let model = rl
        .load_model_from_mesh(thread, unsafe { mesh.make_weak() })
        .ok()?;
    Some(BatchRender { model, quads })
}
