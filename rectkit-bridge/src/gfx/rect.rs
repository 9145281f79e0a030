// rectkit-bridge/src/gfx/rect.rs
//! Shared rectangle pipeline.
//!
//! One unit-quad vertex buffer, one shader, one render pipeline, shared by
//! every rectangle. Each frame rectangles are queued as instances through
//! the [`Canvas`] impl and drawn with a single instanced call.

use rectkit_core::{Canvas, NdcQuad};
use wgpu::util::DeviceExt;
use wgpu::{Buffer, BufferUsages, Device, Queue, RenderPass, RenderPipeline, TextureFormat};

// ════════════════════════════════════════════════════════════════════
// Vertex Layout
// ════════════════════════════════════════════════════════════════════

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct UnitVertex {
    corner: [f32; 2],
}

impl UnitVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Two triangles covering `[0, 1]²`.
const UNIT_QUAD: [UnitVertex; 6] = [
    UnitVertex { corner: [0.0, 0.0] },
    UnitVertex { corner: [1.0, 0.0] },
    UnitVertex { corner: [0.0, 1.0] },
    UnitVertex { corner: [1.0, 0.0] },
    UnitVertex { corner: [1.0, 1.0] },
    UnitVertex { corner: [0.0, 1.0] },
];

// ════════════════════════════════════════════════════════════════════
// Instances
// ════════════════════════════════════════════════════════════════════

/// Per-rectangle GPU data, in normalized device coordinates.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RectInstance {
    pub top_left: [f32; 2],
    /// Signed extent from `top_left` to the bottom-right corner.
    pub size: [f32; 2],
    pub color: [f32; 4],
}

impl RectInstance {
    const ATTRIBS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![1 => Float32x2, 2 => Float32x2, 3 => Float32x4];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

impl From<NdcQuad> for RectInstance {
    fn from(quad: NdcQuad) -> Self {
        Self {
            top_left: [quad.top_left.x, quad.top_left.y],
            size: [
                quad.bottom_right.x - quad.top_left.x,
                quad.bottom_right.y - quad.top_left.y,
            ],
            color: quad.color.to_array(),
        }
    }
}

/// Instances queued for the current frame.
#[derive(Debug, Default, Clone)]
pub struct RectBatch {
    instances: Vec<RectInstance>,
}

impl RectBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn instances(&self) -> &[RectInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Canvas for RectBatch {
    fn fill(&mut self, quad: NdcQuad) {
        self.instances.push(quad.into());
    }
}

// ════════════════════════════════════════════════════════════════════
// Pipeline
// ════════════════════════════════════════════════════════════════════

/// Starting instance capacity; grows by doubling.
const INITIAL_CAPACITY: usize = 64;

pub struct RectPipeline {
    pipeline: RenderPipeline,
    unit_quad: Buffer,
    instance_buffer: Buffer,
    instance_capacity: usize,
    uploaded: u32,
    batch: RectBatch,
}

/// Instance capacity needed to hold `needed` rectangles, doubling from
/// `current`. Never shrinks.
pub fn grown_capacity(current: usize, needed: usize) -> usize {
    let mut capacity = current.max(1);
    while capacity < needed {
        capacity *= 2;
    }
    capacity
}

fn instance_buffer(device: &Device, capacity: usize) -> Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("rect-instances"),
        size: (capacity * std::mem::size_of::<RectInstance>()) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

impl RectPipeline {
    /// Upload the shared unit quad and build the pipeline.
    pub fn init(device: &Device, format: TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("rect.wgsl"),
            source: wgpu::ShaderSource::Wgsl(include_str!("rect.wgsl").into()),
        });

        let unit_quad = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("rect-unit-quad"),
            contents: bytemuck::cast_slice(&UNIT_QUAD[..]),
            usage: BufferUsages::VERTEX,
        });

        // wgpu 28: push_constant_ranges removed, use immediate_size instead
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("rect-pl"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("rect-pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[UnitVertex::layout(), RectInstance::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            cache: None,
            multiview_mask: None,
        });

        tracing::info!("Rectangle pipeline initialized ({:?})", format);

        Self {
            pipeline,
            unit_quad,
            instance_buffer: instance_buffer(device, INITIAL_CAPACITY),
            instance_capacity: INITIAL_CAPACITY,
            uploaded: 0,
            batch: RectBatch::new(),
        }
    }

    /// Release the shared GPU buffers. Consumes the pipeline, so nothing
    /// can be drawn with it afterwards.
    pub fn destroy(self) {
        self.unit_quad.destroy();
        self.instance_buffer.destroy();
        tracing::info!("Rectangle pipeline destroyed");
    }

    /// Drop everything queued this frame.
    pub fn clear(&mut self) {
        self.batch.clear();
        self.uploaded = 0;
    }

    /// Copy queued instances to the GPU, growing the buffer if needed.
    /// Must run before the render pass that calls [`RectPipeline::render`].
    pub fn prepare(&mut self, device: &Device, queue: &Queue) {
        let needed = self.batch.len();
        if needed == 0 {
            self.uploaded = 0;
            return;
        }

        if needed > self.instance_capacity {
            let capacity = grown_capacity(self.instance_capacity, needed);
            tracing::debug!("Growing rect instance buffer to {}", capacity);
            self.instance_buffer.destroy();
            self.instance_buffer = instance_buffer(device, capacity);
            self.instance_capacity = capacity;
        }

        queue.write_buffer(&self.instance_buffer, 0, self.batch.as_bytes());
        self.uploaded = needed as u32;
    }

    /// Draw the uploaded instances in the given render pass.
    pub fn render(&self, pass: &mut RenderPass<'_>) {
        if self.uploaded == 0 {
            return;
        }

        let bytes = self.uploaded as u64 * std::mem::size_of::<RectInstance>() as u64;
        pass.set_pipeline(&self.pipeline);
        pass.set_vertex_buffer(0, self.unit_quad.slice(..));
        pass.set_vertex_buffer(1, self.instance_buffer.slice(..bytes));
        pass.draw(0..UNIT_QUAD.len() as u32, 0..self.uploaded);
    }
}

impl Canvas for RectPipeline {
    fn fill(&mut self, quad: NdcQuad) {
        self.batch.fill(quad);
    }
}
