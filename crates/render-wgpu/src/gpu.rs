use crate::mesh;
use crate::shaders;
use backdrop_render::ParallaxCamera;
use backdrop_scene::{Scene, scene};
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

/// Fog color, 0x050510.
pub const FOG_COLOR: [f32; 3] = [0.0196, 0.0196, 0.0627];
/// Exponential-squared fog density.
pub const FOG_DENSITY: f32 = 0.0015;

/// Errors from GPU acquisition at startup.
#[derive(Debug, thiserror::Error)]
pub enum GpuError {
    #[error("no compatible GPU adapter found")]
    NoAdapter,
    #[error("failed to acquire GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
}

/// Request an adapter and device for the given surface. The single fatal
/// startup path: callers log the error and abort initialization.
pub fn acquire_device(
    instance: &wgpu::Instance,
    surface: &wgpu::Surface<'_>,
) -> Result<(wgpu::Adapter, wgpu::Device, wgpu::Queue), GpuError> {
    let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::HighPerformance,
        compatible_surface: Some(surface),
        force_fallback_adapter: false,
    }))
    .ok_or(GpuError::NoAdapter)?;

    let (device, queue) = pollster::block_on(adapter.request_device(
        &wgpu::DeviceDescriptor {
            label: Some("backdrop_device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            memory_hints: Default::default(),
        },
        None,
    ))?;

    tracing::info!(
        backend = adapter.get_info().backend.to_str(),
        "GPU initialized"
    );
    Ok((adapter, device, queue))
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Globals {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    // rgb = fog color, w = density
    fog: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct FieldParams {
    model: [[f32; 4]; 4],
    tint: [f32; 4],
    size: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Vertex {
    position: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct InstanceData {
    model_0: [f32; 4],
    model_1: [f32; 4],
    model_2: [f32; 4],
    model_3: [f32; 4],
    color: [f32; 4],
}

impl InstanceData {
    fn new(model: Mat4, color: [f32; 3], opacity: f32) -> Self {
        let cols = model.to_cols_array_2d();
        Self {
            model_0: cols[0],
            model_1: cols[1],
            model_2: cols[2],
            model_3: cols[3],
            color: [color[0], color[1], color[2], opacity],
        }
    }
}

fn vertices_of(m: &mesh::TriMesh) -> Vec<Vertex> {
    m.positions
        .iter()
        .map(|p| Vertex {
            position: [p.x, p.y, p.z],
        })
        .collect()
}

/// wgpu backend for the fixed backdrop scene.
///
/// All geometry (icosahedra, tori, starfield instances, billboard quad) is
/// uploaded once at construction; per frame only the camera globals and the
/// six entity transforms are rewritten.
pub struct BackdropRenderer {
    solid_pipeline: wgpu::RenderPipeline,
    translucent_pipeline: wgpu::RenderPipeline,
    wireframe_pipeline: wgpu::RenderPipeline,
    particle_pipeline: wgpu::RenderPipeline,

    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    field_buffer: wgpu::Buffer,
    particle_bind_group: wgpu::BindGroup,

    core_vertex_buffer: wgpu::Buffer,
    core_line_index_buffer: wgpu::Buffer,
    core_line_index_count: u32,
    core_instance_buffer: wgpu::Buffer,

    inner_vertex_buffer: wgpu::Buffer,
    inner_index_buffer: wgpu::Buffer,
    inner_index_count: u32,
    inner_instance_buffer: wgpu::Buffer,

    ring_vertex_buffer: wgpu::Buffer,
    ring_index_buffer: wgpu::Buffer,
    ring_index_count: u32,
    ring_instance_buffer: wgpu::Buffer,

    quad_vertex_buffer: wgpu::Buffer,
    quad_index_buffer: wgpu::Buffer,
    star_instance_buffer: wgpu::Buffer,
    star_count: u32,

    depth_texture: wgpu::TextureView,
    surface_format: wgpu::TextureFormat,
}

impl BackdropRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        scene: &Scene,
    ) -> Self {
        let globals_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("globals_buffer"),
            contents: bytemuck::bytes_of(&Globals {
                view: Mat4::IDENTITY.to_cols_array_2d(),
                proj: Mat4::IDENTITY.to_cols_array_2d(),
                fog: [FOG_COLOR[0], FOG_COLOR[1], FOG_COLOR[2], FOG_DENSITY],
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let field_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("field_buffer"),
            contents: bytemuck::bytes_of(&FieldParams {
                model: Mat4::IDENTITY.to_cols_array_2d(),
                tint: [
                    scene::PARTICLE_COLOR[0],
                    scene::PARTICLE_COLOR[1],
                    scene::PARTICLE_COLOR[2],
                    scene::PARTICLE_OPACITY,
                ],
                size: [scene::PARTICLE_SIZE, 0.0, 0.0, 0.0],
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let globals_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let particle_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("particle_bind_group_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
            ],
        });

        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bind_group"),
            layout: &globals_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let particle_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("particle_bind_group"),
            layout: &particle_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: globals_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: field_buffer.as_entire_binding(),
                },
            ],
        });

        let scene_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pipeline_layout"),
            bind_group_layouts: &[&globals_layout],
            push_constant_ranges: &[],
        });
        let particle_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("particle_pipeline_layout"),
                bind_group_layouts: &[&particle_layout],
                push_constant_ranges: &[],
            });

        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::SCENE_SHADER.into()),
        });
        let particle_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("particle_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::PARTICLE_SHADER.into()),
        });

        let solid_pipeline = scene_pipeline(
            device,
            &scene_layout,
            &scene_shader,
            surface_format,
            "solid_pipeline",
            wgpu::PrimitiveTopology::TriangleList,
            Some(wgpu::BlendState::REPLACE),
            true,
        );
        let translucent_pipeline = scene_pipeline(
            device,
            &scene_layout,
            &scene_shader,
            surface_format,
            "translucent_pipeline",
            wgpu::PrimitiveTopology::TriangleList,
            Some(wgpu::BlendState::ALPHA_BLENDING),
            false,
        );
        let wireframe_pipeline = scene_pipeline(
            device,
            &scene_layout,
            &scene_shader,
            surface_format,
            "wireframe_pipeline",
            wgpu::PrimitiveTopology::LineList,
            Some(wgpu::BlendState::ALPHA_BLENDING),
            false,
        );

        // Additive blending for the starfield glow.
        let additive = wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::SrcAlpha,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
        };

        let particle_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("particle_pipeline"),
            layout: Some(&particle_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &particle_shader,
                entry_point: Some("vs_particle"),
                compilation_options: Default::default(),
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<[f32; 2]>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![0 => Float32x2],
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<[f32; 3]>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &wgpu::vertex_attr_array![1 => Float32x3],
                    },
                ],
            },
            fragment: Some(wgpu::FragmentState {
                module: &particle_shader,
                entry_point: Some("fs_particle"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(additive),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: Some(depth_state(false)),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        // Core wireframe (icosahedron, subdivision 1, radius 4)
        let core_mesh = mesh::icosahedron(scene::CORE_RADIUS, scene::CORE_SUBDIVISIONS);
        let core_lines = mesh::wireframe_edges(&core_mesh);
        let core_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("core_vertex_buffer"),
            contents: bytemuck::cast_slice(&vertices_of(&core_mesh)),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let core_line_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("core_line_index_buffer"),
            contents: bytemuck::cast_slice(&core_lines),
            usage: wgpu::BufferUsages::INDEX,
        });

        // Inner solid (icosahedron, subdivision 0, radius 2)
        let inner_mesh = mesh::icosahedron(scene::INNER_RADIUS, scene::INNER_SUBDIVISIONS);
        let inner_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("inner_vertex_buffer"),
            contents: bytemuck::cast_slice(&vertices_of(&inner_mesh)),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let inner_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("inner_index_buffer"),
            contents: bytemuck::cast_slice(&inner_mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        // Shared ring torus
        let ring_mesh = mesh::torus(
            scene::RING_RADIUS,
            scene::RING_TUBE_RADIUS,
            scene::RING_RADIAL_SEGMENTS,
            scene::RING_TUBULAR_SEGMENTS,
        );
        let ring_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("ring_vertex_buffer"),
            contents: bytemuck::cast_slice(&vertices_of(&ring_mesh)),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let ring_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("ring_index_buffer"),
            contents: bytemuck::cast_slice(&ring_mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        // Starfield billboards: one shared quad, one instance per point.
        let quad: [[f32; 2]; 4] = [[-0.5, -0.5], [0.5, -0.5], [0.5, 0.5], [-0.5, 0.5]];
        let quad_indices: [u32; 6] = [0, 1, 2, 2, 3, 0];
        let quad_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vertex_buffer"),
            contents: bytemuck::cast_slice(&quad),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let quad_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_index_buffer"),
            contents: bytemuck::cast_slice(&quad_indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let stars: Vec<[f32; 3]> = scene
            .starfield()
            .iter()
            .map(|p| [p.x, p.y, p.z])
            .collect();
        let star_instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("star_instance_buffer"),
            contents: bytemuck::cast_slice(&stars),
            usage: wgpu::BufferUsages::VERTEX,
        });

        // Per-entity transform instances, rewritten each frame.
        let entity_instance = |label| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: std::mem::size_of::<InstanceData>() as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        };
        let core_instance_buffer = entity_instance("core_instance_buffer");
        let inner_instance_buffer = entity_instance("inner_instance_buffer");
        let ring_instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("ring_instance_buffer"),
            size: 3 * std::mem::size_of::<InstanceData>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let depth_texture = create_depth_texture(device, width, height);

        Self {
            solid_pipeline,
            translucent_pipeline,
            wireframe_pipeline,
            particle_pipeline,
            globals_buffer,
            globals_bind_group,
            field_buffer,
            particle_bind_group,
            core_vertex_buffer,
            core_line_index_buffer,
            core_line_index_count: core_lines.len() as u32,
            core_instance_buffer,
            inner_vertex_buffer,
            inner_index_buffer,
            inner_index_count: inner_mesh.indices.len() as u32,
            inner_instance_buffer,
            ring_vertex_buffer,
            ring_index_buffer,
            ring_index_count: ring_mesh.indices.len() as u32,
            ring_instance_buffer,
            quad_vertex_buffer,
            quad_index_buffer,
            star_instance_buffer,
            star_count: stars.len() as u32,
            depth_texture,
            surface_format,
        }
    }

    /// Recreate the depth buffer for new surface dimensions. Redundant calls
    /// with unchanged dimensions are safe.
    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_texture = create_depth_texture(device, width, height);
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_format
    }

    /// Render one frame: inner solid, core wireframe, rings, starfield.
    pub fn render(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        camera: &ParallaxCamera,
        scene_state: &Scene,
    ) {
        queue.write_buffer(
            &self.globals_buffer,
            0,
            bytemuck::bytes_of(&Globals {
                view: camera.view_matrix().to_cols_array_2d(),
                proj: camera.projection_matrix().to_cols_array_2d(),
                fog: [FOG_COLOR[0], FOG_COLOR[1], FOG_COLOR[2], FOG_DENSITY],
            }),
        );

        let model_of = |e: &backdrop_scene::Entity| {
            Mat4::from_scale_rotation_translation(
                Vec3::splat(e.scale),
                e.spin.to_quat(),
                Vec3::ZERO,
            )
        };

        queue.write_buffer(
            &self.core_instance_buffer,
            0,
            bytemuck::bytes_of(&InstanceData::new(
                model_of(&scene_state.core),
                scene::CORE_COLOR,
                scene::CORE_OPACITY,
            )),
        );
        queue.write_buffer(
            &self.inner_instance_buffer,
            0,
            bytemuck::bytes_of(&InstanceData::new(
                model_of(&scene_state.inner),
                scene::INNER_COLOR,
                1.0,
            )),
        );
        let ring_instances: Vec<InstanceData> = scene_state
            .rings
            .iter()
            .map(|r| InstanceData::new(model_of(r), scene::RING_COLOR, scene::RING_OPACITY))
            .collect();
        queue.write_buffer(
            &self.ring_instance_buffer,
            0,
            bytemuck::cast_slice(&ring_instances),
        );
        queue.write_buffer(
            &self.field_buffer,
            0,
            bytemuck::bytes_of(&FieldParams {
                model: model_of(&scene_state.particles).to_cols_array_2d(),
                tint: [
                    scene::PARTICLE_COLOR[0],
                    scene::PARTICLE_COLOR[1],
                    scene::PARTICLE_COLOR[2],
                    scene::PARTICLE_OPACITY,
                ],
                size: [scene::PARTICLE_SIZE, 0.0, 0.0, 0.0],
            }),
        );

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("backdrop_encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("backdrop_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: FOG_COLOR[0] as f64,
                            g: FOG_COLOR[1] as f64,
                            b: FOG_COLOR[2] as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            // Opaque inner solid first, then translucent and additive passes.
            pass.set_pipeline(&self.solid_pipeline);
            pass.set_bind_group(0, &self.globals_bind_group, &[]);
            pass.set_vertex_buffer(0, self.inner_vertex_buffer.slice(..));
            pass.set_vertex_buffer(1, self.inner_instance_buffer.slice(..));
            pass.set_index_buffer(self.inner_index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..self.inner_index_count, 0, 0..1);

            pass.set_pipeline(&self.wireframe_pipeline);
            pass.set_bind_group(0, &self.globals_bind_group, &[]);
            pass.set_vertex_buffer(0, self.core_vertex_buffer.slice(..));
            pass.set_vertex_buffer(1, self.core_instance_buffer.slice(..));
            pass.set_index_buffer(
                self.core_line_index_buffer.slice(..),
                wgpu::IndexFormat::Uint32,
            );
            pass.draw_indexed(0..self.core_line_index_count, 0, 0..1);

            pass.set_pipeline(&self.translucent_pipeline);
            pass.set_bind_group(0, &self.globals_bind_group, &[]);
            pass.set_vertex_buffer(0, self.ring_vertex_buffer.slice(..));
            pass.set_vertex_buffer(1, self.ring_instance_buffer.slice(..));
            pass.set_index_buffer(self.ring_index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..self.ring_index_count, 0, 0..3);

            pass.set_pipeline(&self.particle_pipeline);
            pass.set_bind_group(0, &self.particle_bind_group, &[]);
            pass.set_vertex_buffer(0, self.quad_vertex_buffer.slice(..));
            pass.set_vertex_buffer(1, self.star_instance_buffer.slice(..));
            pass.set_index_buffer(self.quad_index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..6, 0, 0..self.star_count);
        }

        queue.submit(std::iter::once(encoder.finish()));
    }
}

#[allow(clippy::too_many_arguments)]
fn scene_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    surface_format: wgpu::TextureFormat,
    label: &str,
    topology: wgpu::PrimitiveTopology,
    blend: Option<wgpu::BlendState>,
    depth_write: bool,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<Vertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &wgpu::vertex_attr_array![0 => Float32x3],
                },
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<InstanceData>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &wgpu::vertex_attr_array![
                        1 => Float32x4,
                        2 => Float32x4,
                        3 => Float32x4,
                        4 => Float32x4,
                        5 => Float32x4,
                    ],
                },
            ],
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend,
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology,
            ..Default::default()
        },
        depth_stencil: Some(depth_state(depth_write)),
        multisample: Default::default(),
        multiview: None,
        cache: None,
    })
}

fn depth_state(depth_write: bool) -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: wgpu::TextureFormat::Depth32Float,
        depth_write_enabled: depth_write,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: Default::default(),
        bias: Default::default(),
    }
}

fn create_depth_texture(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth_texture"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Depth32Float,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&Default::default())
}
