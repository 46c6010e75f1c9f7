//! Renderer-agnostic building blocks for the glint ray tracer.
//!
//! Holds the types shared by the tracer and any other image producer:
//! materials, textures, the color/depth frame buffer, and the per-fragment
//! compositing operations (fog, blending, depth test).

mod fragment;
mod framebuffer;
mod material;
mod texture;

pub use fragment::{
    apply_blending, apply_fog, process_fragment, FogKind, FogParams, Fragment, FragmentFlags,
};
pub use framebuffer::FrameBuffer;
pub use material::{Color, Material};
pub use texture::{Texture, TextureError, TextureResult};
