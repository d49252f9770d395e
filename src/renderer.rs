use anyhow::{bail, Context, Result};
use glam::Mat4;
use std::collections::HashMap;
use std::num::NonZeroU64;
use std::path::Path;
use std::sync::Arc;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::camera::Camera;
use crate::core::GpuContext;
use crate::mesh::{GpuModel, ModelData};
use crate::scenes::{builtin_mesh, DrawCall, MeshKind};
use crate::types::{ModelUniform, Vertex, ViewUniform};

const CLEAR_INTENSITY: f64 = 0.2;

/// Dark night-sky blue
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.3 * CLEAR_INTENSITY,
    g: 0.5 * CLEAR_INTENSITY,
    b: 1.0 * CLEAR_INTENSITY,
    a: 1.0,
};

pub const BUILTIN_SHADER: &str = include_str!("shaders/basic.wgsl");

/// Enough model slots for the desert scene without regrowing
const INITIAL_MODEL_SLOTS: usize = 16;

const MODEL_UNIFORM_SIZE: u64 = std::mem::size_of::<ModelUniform>() as u64;

/// Rounds a uniform size up to the device's dynamic offset alignment
pub fn aligned_stride(size: u64, alignment: u64) -> u64 {
    size.div_ceil(alignment) * alignment
}

/// Lays out one model matrix per `stride` bytes
pub fn pack_model_uniforms(models: &[Mat4], stride: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; models.len() * stride];
    for (slot, model) in bytes.chunks_exact_mut(stride).zip(models) {
        let uniform = ModelUniform::new(*model);
        let data = bytemuck::bytes_of(&uniform);
        slot[..data.len()].copy_from_slice(data);
    }
    bytes
}

/// Dynamic-offset uniform buffer holding every draw call's model matrix
struct ModelSlots {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    stride: u64,
    capacity: usize,
}

impl ModelSlots {
    fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, capacity: usize) -> Self {
        let alignment = device.limits().min_uniform_buffer_offset_alignment as u64;
        let stride = aligned_stride(MODEL_UNIFORM_SIZE, alignment);

        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Model Uniform Buffer"),
            size: stride * capacity as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Model Bind Group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: NonZeroU64::new(MODEL_UNIFORM_SIZE),
                }),
            }],
        });

        Self {
            buffer,
            bind_group,
            stride,
            capacity,
        }
    }

    fn write(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        models: &[Mat4],
    ) {
        if models.len() > self.capacity {
            log::debug!("Growing model uniform buffer to {} slots", models.len());
            *self = Self::new(device, layout, models.len().next_power_of_two());
        }
        if models.is_empty() {
            return;
        }
        queue.write_buffer(
            &self.buffer,
            0,
            &pack_model_uniforms(models, self.stride as usize),
        );
    }

    fn offset(&self, slot: usize) -> wgpu::DynamicOffset {
        (slot as u64 * self.stride) as wgpu::DynamicOffset
    }
}

/// Rasterises the draw list with one vertex-colour pipeline
pub struct SceneRenderer {
    gpu: GpuContext,
    pipeline: wgpu::RenderPipeline,
    view_buffer: wgpu::Buffer,
    view_bind_group: wgpu::BindGroup,
    model_layout: wgpu::BindGroupLayout,
    model_slots: ModelSlots,
    meshes: HashMap<MeshKind, GpuModel>,
}

impl SceneRenderer {
    /// Sets up the GPU and uploads the built-in meshes
    ///
    /// `shader_path` replaces the embedded WGSL; if it cannot be read or
    /// fails validation the embedded shader is used instead.
    pub async fn new(window: Arc<Window>, shader_path: Option<&Path>) -> Result<Self> {
        let gpu = GpuContext::new(window).await?;
        let device = gpu.device();

        let view_layout = Self::create_uniform_layout(device, "View Bind Group Layout", false);
        let model_layout = Self::create_uniform_layout(device, "Model Bind Group Layout", true);

        let view_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("View Uniform Buffer"),
            contents: bytemuck::bytes_of(&ViewUniform::new(Mat4::IDENTITY, Mat4::IDENTITY)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let view_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("View Bind Group"),
            layout: &view_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: view_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&view_layout, &model_layout],
            push_constant_ranges: &[],
        });

        let format = gpu.surface_format();
        let custom = match shader_path {
            Some(path) => match Self::load_custom_pipeline(device, &pipeline_layout, format, path)
                .await
            {
                Ok(pipeline) => {
                    log::info!("Using shader {:?}", path);
                    Some(pipeline)
                }
                Err(e) => {
                    log::error!("{:#}; falling back to the built-in shader", e);
                    None
                }
            },
            None => None,
        };
        let pipeline = match custom {
            Some(pipeline) => pipeline,
            None => {
                Self::create_render_pipeline(
                    device,
                    &pipeline_layout,
                    format,
                    BUILTIN_SHADER,
                    "Built-in",
                )
                .await?
            }
        };

        let model_slots = ModelSlots::new(device, &model_layout, INITIAL_MODEL_SLOTS);

        let mut meshes = HashMap::new();
        for kind in [
            MeshKind::Plane,
            MeshKind::Pyramid,
            MeshKind::Moon,
            MeshKind::Carpet,
        ] {
            if let Some(mesh) = builtin_mesh(kind) {
                let model = ModelData { meshes: vec![mesh] };
                meshes.insert(kind, GpuModel::upload(device, &format!("{:?}", kind), &model));
            }
        }

        log::info!("Renderer initialized ({:?})", format);

        Ok(Self {
            gpu,
            pipeline,
            view_buffer,
            view_bind_group,
            model_layout,
            model_slots,
            meshes,
        })
    }

    /// Uploads `model` for every draw call of `kind`, replacing what was there
    pub fn set_model(&mut self, kind: MeshKind, model: &ModelData) {
        let gpu_model = GpuModel::upload(self.gpu.device(), &format!("{:?}", kind), model);
        if gpu_model.is_empty() {
            log::warn!("{:?} model has no drawable meshes", kind);
        }
        self.meshes.insert(kind, gpu_model);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    /// Draws one frame; frames the surface cannot take are skipped
    pub fn render(&mut self, camera: &Camera, calls: &[DrawCall]) -> Result<()> {
        let (width, height) = self.gpu.size();
        let Some(projection) = camera.projection_matrix(width, height) else {
            return Ok(());
        };
        let Some(frame) = self.gpu.acquire_frame()? else {
            return Ok(());
        };

        self.gpu.queue().write_buffer(
            &self.view_buffer,
            0,
            bytemuck::bytes_of(&ViewUniform::new(camera.view_matrix(), projection)),
        );

        let models: Vec<Mat4> = calls.iter().map(|call| call.model).collect();
        self.model_slots.write(
            self.gpu.device(),
            self.gpu.queue(),
            &self.model_layout,
            &models,
        );

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Scene Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: self.gpu.depth_view(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.view_bind_group, &[]);

            for (slot, call) in calls.iter().enumerate() {
                let Some(model) = self.meshes.get(&call.mesh) else {
                    continue;
                };
                pass.set_bind_group(
                    1,
                    &self.model_slots.bind_group,
                    &[self.model_slots.offset(slot)],
                );
                model.draw(&mut pass);
            }
        }

        self.gpu.queue().submit(Some(encoder.finish()));
        frame.present();

        Ok(())
    }

    async fn load_custom_pipeline(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        format: wgpu::TextureFormat,
        path: &Path,
    ) -> Result<wgpu::RenderPipeline> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read shader {:?}", path))?;
        Self::create_render_pipeline(device, layout, format, &source, &path.display().to_string())
            .await
    }

    /// Compiles `source` and builds the scene pipeline from it
    async fn create_render_pipeline(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        format: wgpu::TextureFormat,
        source: &str,
        label: &str,
    ) -> Result<wgpu::RenderPipeline> {
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Scene Pipeline"),
            layout: Some(layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: GpuContext::DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        if let Some(error) = device.pop_error_scope().await {
            bail!("Shader {} failed validation: {}", label, error);
        }

        Ok(pipeline)
    }

    fn create_uniform_layout(
        device: &wgpu::Device,
        label: &str,
        dynamic: bool,
    ) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(label),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: dynamic,
                    min_binding_size: None,
                },
                count: None,
            }],
        })
    }
}
