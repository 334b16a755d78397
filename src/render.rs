use crate::core::{BackgroundScene, ORB_OPACITY, PARTICLE_OPACITY, PARTICLE_SIZE};
use glam::Mat4;
use web_sys as web;

pub mod canvas;
mod particles;
use particles::{create_points_resources, DrawLayer, InstanceRaw, PointsResources, SceneUniforms};

// ===================== WebGPU state for the decorative background =====================

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    points: PointsResources,
    particle_layer: DrawLayer,
    orb_layer: DrawLayer,
    orb_scratch: Vec<InstanceRaw>,
    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        particle_count: usize,
        orb_count: usize,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // the page shows through the canvas, so prefer a premultiplied surface
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .or_else(|| caps.alpha_modes.first().copied())
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let points = create_points_resources(&device, format);
        let particle_layer = DrawLayer::new(&device, &points, particle_count, "particle_layer");
        let orb_layer = DrawLayer::new(&device, &points, orb_count, "orb_layer");
        log::info!(
            "[bg] WebGPU ready {}x{} particles={} orbs={}",
            width,
            height,
            particle_count,
            orb_count
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            points,
            particle_layer,
            orb_layer,
            orb_scratch: Vec::with_capacity(orb_count),
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn upload_particles(&mut self, scene: &BackgroundScene) {
        let data: Vec<InstanceRaw> = scene
            .particles
            .iter()
            .map(|p| InstanceRaw {
                pos_size: [
                    p.position.x,
                    p.position.y,
                    p.position.z,
                    PARTICLE_SIZE * 0.5,
                ],
                color: [p.color.x, p.color.y, p.color.z, PARTICLE_OPACITY],
            })
            .collect();
        self.particle_layer.write_instances(&self.queue, &data);
    }

    fn upload_orbs(&mut self, scene: &BackgroundScene, time_ms: f64) {
        self.orb_scratch.clear();
        self.orb_scratch.extend(scene.orbs.iter().map(|o| InstanceRaw {
            pos_size: [
                o.position.x,
                o.position.y,
                o.position.z,
                o.radius * o.scale_at(time_ms),
            ],
            color: [1.0, 1.0, 1.0, ORB_OPACITY],
        }));
        self.orb_layer.write_instances(&self.queue, &self.orb_scratch);
    }

    pub fn render(
        &mut self,
        scene: &mut BackgroundScene,
        time_ms: f64,
    ) -> Result<(), wgpu::SurfaceError> {
        if scene.take_colors_dirty() {
            self.upload_particles(scene);
        }
        self.upload_orbs(scene, time_ms);

        let aspect = self.width as f32 / self.height.max(1) as f32;
        let view = scene.view_matrix().to_cols_array_2d();
        let proj = scene.projection_matrix(aspect).to_cols_array_2d();
        self.particle_layer.write_uniforms(
            &self.queue,
            &SceneUniforms {
                view,
                proj,
                model: scene.particle_model(time_ms).to_cols_array_2d(),
                tint: [1.0; 4],
            },
        );
        self.orb_layer.write_uniforms(
            &self.queue,
            &SceneUniforms {
                view,
                proj,
                model: Mat4::IDENTITY.to_cols_array_2d(),
                tint: [1.0; 4],
            },
        );

        let frame = self.surface.get_current_texture()?;
        let target = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("background_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.points.pipeline);
            self.particle_layer.draw(&mut rpass);
            self.orb_layer.draw(&mut rpass);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
