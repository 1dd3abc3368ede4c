//! WGPU-based rendering engine
//!
//! One pipeline draws every object: a camera uniform at group 0 and a
//! per-object uniform (model matrix, color, shading mode) at group 1, with a
//! depth buffer sized to the surface.

use wgpu::util::DeviceExt;

use crate::{
    animation::FrameRenderer,
    error::RenderError,
    gfx::{
        camera::{CameraUniform, PerspectiveCamera},
        color::Color,
        resources::texture_resource::TextureResource,
        scene::{Object, Scene, Vertex3D},
    },
    wgpu_utils::{
        binding_types::{single_resource_bind_group, single_uniform_layout},
        uniform_buffer::UniformBuffer,
    },
};

/// Per-object uniform data; must match `ObjectData` in `basic.wgsl`
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub shading: u32,
    _padding: [u32; 3],
}

impl ObjectUniform {
    pub fn new(object: &Object, color: Color, shading: u32) -> Self {
        Self {
            model: object.transform().into(),
            color: color.to_rgba_f32(),
            shading,
            _padding: [0; 3],
        }
    }
}

/// GPU buffers for one scene object, created the first time it is drawn
struct ObjectGpuResources {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform: UniformBuffer<ObjectUniform>,
    bind_group: wgpu::BindGroup,
}

/// Core rendering engine managing GPU resources and draw calls
pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_texture: TextureResource,
    pipeline: wgpu::RenderPipeline,
    camera_ubo: UniformBuffer<CameraUniform>,
    camera_bind_group: wgpu::BindGroup,
    object_layout: wgpu::BindGroupLayout,
    objects: Vec<ObjectGpuResources>,
    clear_color: Color,
}

impl RenderEngine {
    /// Creates a new render engine for the given window
    ///
    /// # Arguments
    /// * `window` - Window surface target for rendering
    /// * `width` - Initial drawing buffer width in pixels
    /// * `height` - Initial drawing buffer height in pixels
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
    ) -> Result<RenderEngine, RenderError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        let adapter_info = adapter.get_info();
        log::info!(
            "using {} ({:?}, {:?})",
            adapter_info.name,
            adapter_info.device_type,
            adapter_info.backend
        );

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                    .using_resolution(adapter.limits()),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_capabilities = surface.get_capabilities(&adapter);
        // Non-sRGB so hex colors reach the screen unchanged
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_capabilities.formats.first().copied())
            .ok_or(RenderError::NoSurfaceFormat)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_capabilities
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture =
            TextureResource::create_depth_texture(&device, &config, "depth_texture");

        let camera_layout = single_uniform_layout(
            &device,
            wgpu::ShaderStages::VERTEX_FRAGMENT,
            "Camera Bind Group Layout",
        );
        let camera_ubo = UniformBuffer::new_with_data(&device, &CameraUniform::default());
        let camera_bind_group = single_resource_bind_group(
            &device,
            &camera_layout,
            camera_ubo.binding_resource(),
            "Camera Bind Group",
        );

        let object_layout = single_uniform_layout(
            &device,
            wgpu::ShaderStages::VERTEX_FRAGMENT,
            "Object Bind Group Layout",
        );

        let pipeline = create_pipeline(&device, format, &[&camera_layout, &object_layout]);

        Ok(RenderEngine {
            surface,
            device,
            queue,
            config,
            depth_texture,
            pipeline,
            camera_ubo,
            camera_bind_group,
            object_layout,
            objects: Vec::new(),
            clear_color: Color::BLACK,
        })
    }

    /// Resizes the surface and recreates the depth buffer
    ///
    /// Zero-sized requests (minimized windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if (width, height) == (self.config.width, self.config.height) {
            return;
        }

        self.config.width = width;
        self.config.height = height;
        self.reconfigure();
    }

    fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
        self.depth_texture =
            TextureResource::create_depth_texture(&self.device, &self.config, "depth_texture");
    }

    /// Returns current surface dimensions in pixels
    pub fn surface_size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Drops GPU buffers held for scene objects
    pub fn release_scene_resources(&mut self) {
        self.objects.clear();
    }

    /// Creates buffers for objects added since the last frame
    fn sync_objects(&mut self, scene: &Scene) {
        if scene.len() < self.objects.len() {
            self.objects.truncate(scene.len());
        }

        for object in scene.children().iter().skip(self.objects.len()) {
            let vertices = object.geometry.to_vertices();
            let vertex_buffer = self
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("{} vertices", object.name)),
                    contents: bytemuck::cast_slice(&vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                });
            let index_buffer = self
                .device
                .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("{} indices", object.name)),
                    contents: bytemuck::cast_slice(&object.geometry.indices),
                    usage: wgpu::BufferUsages::INDEX,
                });

            let uniform = UniformBuffer::new_with_data(
                &self.device,
                &ObjectUniform::new(object, Color::BLACK, 0),
            );
            let bind_group = single_resource_bind_group(
                &self.device,
                &self.object_layout,
                uniform.binding_resource(),
                "Object Bind Group",
            );

            log::debug!(
                "uploaded '{}' ({} vertices, {} triangles)",
                object.name,
                object.geometry.vertex_count(),
                object.geometry.triangle_count()
            );

            self.objects.push(ObjectGpuResources {
                vertex_buffer,
                index_buffer,
                index_count: object.geometry.indices.len() as u32,
                uniform,
                bind_group,
            });
        }
    }

    /// Draws one frame of `scene` as seen from `camera`
    pub fn render_frame(
        &mut self,
        scene: &Scene,
        camera: &PerspectiveCamera,
    ) -> Result<(), RenderError> {
        self.sync_objects(scene);

        self.camera_ubo.update_content(&self.queue, camera.uniform());
        for (object, gpu) in scene.children().iter().zip(self.objects.iter_mut()) {
            let Some(material) = scene.material_for(object) else {
                continue;
            };
            let content =
                ObjectUniform::new(object, material.display_color(), material.shading_mode());
            gpu.uniform.update_content(&self.queue, content);
        }

        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(err) => {
                let err = RenderError::from(err);
                if matches!(err, RenderError::SurfaceLost) {
                    self.reconfigure();
                }
                return Err(err);
            }
        };

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Main Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color.to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.camera_bind_group, &[]);

            for (object, gpu) in scene.children().iter().zip(self.objects.iter()) {
                if !object.visible {
                    continue;
                }
                render_pass.set_bind_group(1, &gpu.bind_group, &[]);
                render_pass.set_vertex_buffer(0, gpu.vertex_buffer.slice(..));
                render_pass.set_index_buffer(gpu.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..gpu.index_count, 0, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
        Ok(())
    }
}

impl FrameRenderer for RenderEngine {
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<(), RenderError> {
        self.render_frame(scene, camera)
    }
}

fn create_pipeline(
    device: &wgpu::Device,
    format: wgpu::TextureFormat,
    bind_group_layouts: &[&wgpu::BindGroupLayout],
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Basic Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("basic.wgsl").into()),
    });

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Basic Pipeline Layout"),
        bind_group_layouts,
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Basic Pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            buffers: &[Vertex3D::desc()],
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(wgpu::Face::Back),
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: TextureResource::DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{geometry::generate_cube, scene::MaterialId};

    #[test]
    fn test_object_uniform_layout_matches_shader() {
        // mat4x4 + vec4 + u32, rounded up to a 16 byte multiple
        assert_eq!(std::mem::size_of::<ObjectUniform>(), 96);
        assert_eq!(std::mem::size_of::<CameraUniform>(), 80);
    }

    #[test]
    fn test_object_uniform_content() {
        let object = Object::new("cube", generate_cube(), MaterialId(0));
        let uniform = ObjectUniform::new(&object, Color::RED, 1);

        assert_eq!(uniform.color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(uniform.shading, 1);
        assert_eq!(uniform.model[3], [0.0, 0.0, 0.0, 1.0]);
    }
}
