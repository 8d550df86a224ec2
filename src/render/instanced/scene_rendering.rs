//! Core GPU renderer for the instanced scene
//!
//! Manages the wgpu pipelines, buffers, and draw calls for the hex grid,
//! the split divider, and the node billboards.

use std::sync::Mutex;

use once_cell::sync::Lazy;
use wgpu::util::DeviceExt;

use super::config::GraphicsConfig;
use super::instance::{HexInstanceData, NodeInstanceData, SceneUniforms};

/// Global renderer shared by all scene paint callbacks; created lazily on
/// the first prepared frame.
pub static GLOBAL_SCENE_RENDERER: Lazy<Mutex<Option<GpuSceneRenderer>>> =
    Lazy::new(|| Mutex::new(None));

const MAX_HEX_INSTANCES: usize = 32_768;
const MAX_NODE_INSTANCES: usize = 1_024;

/// GPU-accelerated hex grid, divider, and node renderer
pub struct GpuSceneRenderer {
    hex_render_pipeline: wgpu::RenderPipeline,
    node_render_pipeline: wgpu::RenderPipeline,
    divider_render_pipeline: wgpu::RenderPipeline,
    hex_vertex_buffer: wgpu::Buffer,
    node_vertex_buffer: wgpu::Buffer,
    node_index_buffer: wgpu::Buffer,
    hex_instance_buffer: wgpu::Buffer,
    node_instance_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
}

impl GpuSceneRenderer {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let hex_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Hex Grid Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("./shaders/hex.wgsl").into()),
        });

        let node_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Node Billboard Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("./shaders/node.wgsl").into()),
        });

        let divider_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Divider Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("./shaders/divider.wgsl").into()),
        });

        // Unit hexagon outline as a line list, vertex i at i * 60 degrees
        let mut hex_vertices = [0.0_f32; 24];
        for edge in 0..6 {
            for (slot, vertex) in [edge, (edge + 1) % 6].into_iter().enumerate() {
                let angle = vertex as f32 * std::f32::consts::PI / 3.0;
                hex_vertices[edge * 4 + slot * 2] = angle.cos();
                hex_vertices[edge * 4 + slot * 2 + 1] = angle.sin();
            }
        }
        let hex_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Hex Vertex Buffer"),
            contents: bytemuck::cast_slice(&hex_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        // Billboard quad corners in -1..1
        #[rustfmt::skip]
        let quad_vertices: &[f32] = &[
            -1.0, -1.0,
             1.0, -1.0,
             1.0,  1.0,
            -1.0,  1.0,
        ];
        let node_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Node Vertex Buffer"),
            contents: bytemuck::cast_slice(quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let quad_indices: &[u16] = &[0, 1, 2, 2, 3, 0];
        let node_index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Node Index Buffer"),
            contents: bytemuck::cast_slice(quad_indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let hex_instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Hex Instance Buffer"),
            size: (MAX_HEX_INSTANCES * std::mem::size_of::<HexInstanceData>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let node_instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Node Instance Buffer"),
            size: (MAX_NODE_INSTANCES * std::mem::size_of::<NodeInstanceData>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Scene Uniform Buffer"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Scene Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Scene Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let config = GraphicsConfig {
            sample_count: GraphicsConfig::global().sample_count,
            texture_format: format,
        };

        let hex_render_pipeline =
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Hex Grid Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &hex_shader,
                    entry_point: Some("vs_main"),
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                    buffers: &[
                        wgpu::VertexBufferLayout {
                            array_stride: 8,
                            step_mode: wgpu::VertexStepMode::Vertex,
                            attributes: &[wgpu::VertexAttribute {
                                format: wgpu::VertexFormat::Float32x2,
                                offset: 0,
                                shader_location: 0,
                            }],
                        },
                        wgpu::VertexBufferLayout {
                            array_stride: std::mem::size_of::<HexInstanceData>() as u64,
                            step_mode: wgpu::VertexStepMode::Instance,
                            attributes: &[wgpu::VertexAttribute {
                                format: wgpu::VertexFormat::Float32x2,
                                offset: 0,
                                shader_location: 1,
                            }],
                        },
                    ],
                },
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::LineList,
                    ..Default::default()
                },
                depth_stencil: None,
                multisample: config.multisample_state(),
                fragment: Some(wgpu::FragmentState {
                    module: &hex_shader,
                    entry_point: Some("fs_main"),
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                    targets: &[Some(config.color_target_state())],
                }),
                multiview: None,
                cache: None,
            });

        let node_render_pipeline =
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Node Billboard Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &node_shader,
                    entry_point: Some("vs_main"),
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                    buffers: &[
                        wgpu::VertexBufferLayout {
                            array_stride: 8,
                            step_mode: wgpu::VertexStepMode::Vertex,
                            attributes: &[wgpu::VertexAttribute {
                                format: wgpu::VertexFormat::Float32x2,
                                offset: 0,
                                shader_location: 0,
                            }],
                        },
                        wgpu::VertexBufferLayout {
                            array_stride: std::mem::size_of::<NodeInstanceData>() as u64,
                            step_mode: wgpu::VertexStepMode::Instance,
                            attributes: &[
                                // World position
                                wgpu::VertexAttribute {
                                    format: wgpu::VertexFormat::Float32x3,
                                    offset: 0,
                                    shader_location: 1,
                                },
                                // Radius
                                wgpu::VertexAttribute {
                                    format: wgpu::VertexFormat::Float32,
                                    offset: 12,
                                    shader_location: 2,
                                },
                                // Color
                                wgpu::VertexAttribute {
                                    format: wgpu::VertexFormat::Float32x4,
                                    offset: 16,
                                    shader_location: 3,
                                },
                                // Hover scale
                                wgpu::VertexAttribute {
                                    format: wgpu::VertexFormat::Float32,
                                    offset: 32,
                                    shader_location: 4,
                                },
                            ],
                        },
                    ],
                },
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    ..Default::default()
                },
                depth_stencil: None,
                multisample: config.multisample_state(),
                fragment: Some(wgpu::FragmentState {
                    module: &node_shader,
                    entry_point: Some("fs_main"),
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                    targets: &[Some(config.color_target_state())],
                }),
                multiview: None,
                cache: None,
            });

        let divider_render_pipeline =
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Divider Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &divider_shader,
                    entry_point: Some("vs_main"),
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                    buffers: &[],
                },
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleStrip,
                    ..Default::default()
                },
                depth_stencil: None,
                multisample: config.multisample_state(),
                fragment: Some(wgpu::FragmentState {
                    module: &divider_shader,
                    entry_point: Some("fs_main"),
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                    targets: &[Some(config.color_target_state())],
                }),
                multiview: None,
                cache: None,
            });

        Self {
            hex_render_pipeline,
            node_render_pipeline,
            divider_render_pipeline,
            hex_vertex_buffer,
            node_vertex_buffer,
            node_index_buffer,
            hex_instance_buffer,
            node_instance_buffer,
            uniform_buffer,
            uniform_bind_group,
        }
    }

    pub fn update_uniforms(&self, queue: &wgpu::Queue, uniforms: &SceneUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    pub fn update_hex_instances(&self, queue: &wgpu::Queue, instances: &[HexInstanceData]) {
        let count = instances.len().min(MAX_HEX_INSTANCES);
        queue.write_buffer(
            &self.hex_instance_buffer,
            0,
            bytemuck::cast_slice(&instances[..count]),
        );
    }

    pub fn update_node_instances(&self, queue: &wgpu::Queue, instances: &[NodeInstanceData]) {
        let count = instances.len().min(MAX_NODE_INSTANCES);
        queue.write_buffer(
            &self.node_instance_buffer,
            0,
            bytemuck::cast_slice(&instances[..count]),
        );
    }

    pub fn render_hex_grid(&self, render_pass: &mut wgpu::RenderPass<'_>, instance_count: u32) {
        if instance_count == 0 {
            return;
        }
        render_pass.set_pipeline(&self.hex_render_pipeline);
        render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.hex_vertex_buffer.slice(..));
        render_pass.set_vertex_buffer(1, self.hex_instance_buffer.slice(..));
        render_pass.draw(0..12, 0..instance_count.min(MAX_HEX_INSTANCES as u32));
    }

    pub fn render_divider(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_pipeline(&self.divider_render_pipeline);
        render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);
        render_pass.draw(0..4, 0..1);
    }

    pub fn render_nodes(&self, render_pass: &mut wgpu::RenderPass<'_>, instance_count: u32) {
        if instance_count == 0 {
            return;
        }
        render_pass.set_pipeline(&self.node_render_pipeline);
        render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.node_vertex_buffer.slice(..));
        render_pass.set_vertex_buffer(1, self.node_instance_buffer.slice(..));
        render_pass
            .set_index_buffer(self.node_index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        render_pass.draw_indexed(0..6, 0, 0..instance_count.min(MAX_NODE_INSTANCES as u32));
    }
}
