use anyhow::Result;

use crate::coords::Size;
use crate::raster::PixelBuffer;

use super::blit::{
    frame_texture_format, BlitPipelineDesc, FULLSCREEN_BLIT, SAMPLER_BINDING, TEXTURE_BINDING,
};
use super::RenderTarget;

/// Puts a CPU `PixelBuffer` on screen.
///
/// Owns the frame texture (the GPU copy of the buffer) and the immutable blit
/// pipeline built from a [`BlitPipelineDesc`]. Per frame the caller runs
/// [`upload`](Self::upload) then [`draw`](Self::draw) inside one acquired frame;
/// nothing here is rebuilt after construction.
pub struct Compositor {
    desc: BlitPipelineDesc,
    size: Size,
    texture: wgpu::Texture,
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
}

impl Compositor {
    /// Creates the compositor for buffers of `size`, drawing onto targets of
    /// `target_format`, using [`FULLSCREEN_BLIT`].
    pub fn new(device: &wgpu::Device, target_format: wgpu::TextureFormat, size: Size) -> Self {
        Self::with_descriptor(device, target_format, size, FULLSCREEN_BLIT)
    }

    pub fn with_descriptor(
        device: &wgpu::Device,
        target_format: wgpu::TextureFormat,
        size: Size,
        desc: BlitPipelineDesc,
    ) -> Self {
        let texture_format = frame_texture_format(target_format);

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("gridline frame texture"),
            size: wgpu::Extent3d {
                width: size.width.max(1),
                height: size.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: texture_format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("gridline frame sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: desc.filter,
            min_filter: desc.filter,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("gridline blit shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/blit.wgsl").into()),
        });

        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("gridline blit bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: TEXTURE_BINDING,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: SAMPLER_BINDING,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("gridline blit bind group"),
            layout: &bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: TEXTURE_BINDING,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: SAMPLER_BINDING,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("gridline blit pipeline layout"),
            bind_group_layouts: &[&bgl],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(desc.label),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some(desc.vertex_entry),
                compilation_options: Default::default(),
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some(desc.fragment_entry()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: desc.topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!(
            "compositor ready: {}x{} {:?} -> {:?}, swizzle {:?}",
            size.width,
            size.height,
            texture_format,
            target_format,
            desc.swizzle
        );

        Self {
            desc,
            size,
            texture,
            pipeline,
            bind_group,
        }
    }

    /// Overwrites the whole frame texture with `buffer`'s bytes, top row first.
    ///
    /// Bytes are copied as-is; channel order is fixed up by the pipeline's swizzle.
    pub fn upload(&self, queue: &wgpu::Queue, buffer: &PixelBuffer) -> Result<()> {
        anyhow::ensure!(
            buffer.size() == self.size,
            "pixel buffer is {}x{} but the frame texture is {}x{}",
            buffer.width(),
            buffer.height(),
            self.size.width,
            self.size.height
        );

        queue.write_texture(
            self.texture.as_image_copy(),
            buffer.as_bytes(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(buffer.stride()),
                rows_per_image: Some(buffer.height()),
            },
            wgpu::Extent3d {
                width: self.size.width,
                height: self.size.height,
                depth_or_array_layers: 1,
            },
        );
        Ok(())
    }

    /// Records the single fullscreen draw onto `target`, covering `viewport`.
    pub fn draw(&self, target: &mut RenderTarget<'_>, viewport: Size) {
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("gridline blit pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_viewport(
            0.0,
            0.0,
            viewport.width.max(1) as f32,
            viewport.height.max(1) as f32,
            0.0,
            1.0,
        );
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.draw(0..self.desc.vertex_count, 0..1);
    }
}
