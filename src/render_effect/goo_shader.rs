// SPDX-License-Identifier: MPL-2.0
//! GPU implementation of the goo effect using a custom wgpu shader.
//!
//! Instead of blurring an offscreen copy of the widget tree, the shader
//! re-renders the FAB silhouettes analytically: each body becomes a disc in
//! a uniform buffer, the fragment stage accumulates a Gaussian falloff
//! field around the discs (the blur stage), and the alpha remap row is
//! applied to the accumulated coverage (the color-matrix stage). The field
//! constants come from [`RenderEffect::goo`](super::RenderEffect::goo) so
//! the model and the GPU path cannot drift apart.

use super::RenderEffect;
use crate::animation::stagger::{self, SATELLITES};
use crate::ui::design_tokens::{palette, sizing};
use crate::ui::fab_anchor;
use iced::widget::shader::{self, Viewport};
use iced::{mouse, Element, Length, Rectangle};
use wgpu;

/// Number of disc slots in the uniform buffer: three satellites plus the
/// center filler. The toggle has a transparent body and casts no goo.
const MAX_DISCS: usize = 4;

/// Full-screen filtered layer at the given global progress.
pub fn view<'a, Message: 'static>(progress: f32) -> Element<'a, Message> {
    shader::Shader::new(GooProgram { progress })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The shader program; recreated every frame with the current progress.
#[derive(Debug, Clone, Copy)]
struct GooProgram {
    progress: f32,
}

impl<Message> shader::Program<Message> for GooProgram {
    type State = ();
    type Primitive = GooPrimitive;

    fn draw(
        &self,
        _state: &Self::State,
        _cursor: mouse::Cursor,
        _bounds: Rectangle,
    ) -> Self::Primitive {
        GooPrimitive {
            progress: self.progress,
        }
    }
}

/// The rendering primitive carrying the animation progress to the GPU.
#[derive(Debug, Clone, Copy)]
pub struct GooPrimitive {
    progress: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    /// x, y, radius in physical pixels; w is the disc weight.
    discs: [[f32; 4]; MAX_DISCS],
    color: [f32; 4],
    /// sigma (physical px), alpha scale, alpha offset (normalized), disc count.
    params: [f32; 4],
}

impl GooPrimitive {
    /// Resolves the disc layout in physical pixels from the widget bounds.
    fn uniforms(&self, bounds: &Rectangle, viewport: &Viewport) -> Uniforms {
        let scale = viewport.scale_factor();
        let local = Rectangle::with_size(bounds.size());
        let anchor = fab_anchor(local);
        let body_radius = sizing::FAB_SIZE / 2.0 * sizing::FAB_SCALE;

        let to_physical = |x: f32, y: f32| -> (f32, f32) {
            ((bounds.x + x) * scale, (bounds.y + y) * scale)
        };

        let mut discs = [[0.0_f32; 4]; MAX_DISCS];
        for (slot, motion) in discs.iter_mut().zip(SATELLITES.iter()) {
            let pose = motion.pose(self.progress);
            let (x, y) = to_physical(anchor.x + pose.offset.x, anchor.y - pose.offset.y);
            *slot = [x, y, body_radius * scale, 1.0];
        }
        let filler = stagger::filler_scale(self.progress);
        let (ax, ay) = to_physical(anchor.x, anchor.y);
        discs[3] = [ax, ay, body_radius * filler * scale, if filler > 0.0 { 1.0 } else { 0.0 }];

        let effect = RenderEffect::goo();
        let (alpha_scale, alpha_offset) = effect.alpha.normalized();
        // Three-sigma rule: the configured blur radius is the visually
        // perceptible extent of the falloff.
        let sigma = effect.blur.radius_x / 3.0 * scale;

        let secondary = palette::SECONDARY;
        Uniforms {
            discs,
            color: [secondary.r, secondary.g, secondary.b, 1.0],
            params: [sigma, alpha_scale, alpha_offset, MAX_DISCS as f32],
        }
    }
}

impl shader::Primitive for GooPrimitive {
    type Pipeline = GooPipeline;

    fn prepare(
        &self,
        pipeline: &mut Self::Pipeline,
        _device: &wgpu::Device,
        queue: &wgpu::Queue,
        bounds: &Rectangle,
        viewport: &Viewport,
    ) {
        pipeline.store_physical_bounds(bounds, viewport);
        let uniforms = self.uniforms(bounds, viewport);
        queue.write_buffer(&pipeline.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    fn render(
        &self,
        pipeline: &Self::Pipeline,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        clip_bounds: &Rectangle<u32>,
    ) {
        pipeline.render(encoder, target, clip_bounds);
    }
}

/// The wgpu pipeline for the goo layer.
pub struct GooPipeline {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    widget_physical_bounds: Rectangle<f32>,
}

impl shader::Pipeline for GooPipeline {
    fn new(device: &wgpu::Device, _queue: &wgpu::Queue, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Goo Shader"),
            source: wgpu::ShaderSource::Wgsl(GOO_SHADER.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Goo Uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let uniform_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Goo Uniform Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Goo Uniform Bind Group"),
            layout: &uniform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Goo Pipeline Layout"),
            bind_group_layouts: &[&uniform_bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Goo Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        Self {
            pipeline,
            uniform_buffer,
            uniform_bind_group,
            widget_physical_bounds: Rectangle::default(),
        }
    }
}

impl GooPipeline {
    /// Store the widget's physical bounds for use in render().
    fn store_physical_bounds(&mut self, bounds: &Rectangle, viewport: &Viewport) {
        let scale = viewport.scale_factor();
        self.widget_physical_bounds = Rectangle {
            x: bounds.x * scale,
            y: bounds.y * scale,
            width: bounds.width * scale,
            height: bounds.height * scale,
        };
    }

    fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        clip_bounds: &Rectangle<u32>,
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Goo Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.uniform_bind_group, &[]);

        let wb = &self.widget_physical_bounds;
        render_pass.set_viewport(wb.x, wb.y, wb.width, wb.height, 0.0, 1.0);
        render_pass.set_scissor_rect(
            clip_bounds.x,
            clip_bounds.y,
            clip_bounds.width,
            clip_bounds.height,
        );

        render_pass.draw(0..4, 0..1);
    }
}

/// WGSL source for the goo layer.
///
/// The vertex stage emits a fullscreen quad that fills the viewport set in
/// `render()`. The fragment stage works in framebuffer coordinates via the
/// position builtin, so the disc centers are uploaded in physical pixels.
const GOO_SHADER: &str = r#"
struct Uniforms {
    discs: array<vec4<f32>, 4>,
    color: vec4<f32>,
    params: vec4<f32>,
}

@group(0) @binding(0)
var<uniform> u: Uniforms;

struct VertexOutput {
    @builtin(position) position: vec4<f32>,
}

@vertex
fn vs_main(@builtin(vertex_index) vertex_index: u32) -> VertexOutput {
    let x = f32(vertex_index & 1u);
    let y = f32(vertex_index >> 1u);

    var output: VertexOutput;
    output.position = vec4<f32>(x * 2.0 - 1.0, 1.0 - y * 2.0, 0.0, 1.0);
    return output;
}

@fragment
fn fs_main(input: VertexOutput) -> @location(0) vec4<f32> {
    let sigma = u.params.x;
    let alpha_scale = u.params.y;
    let alpha_offset = u.params.z;
    let count = u32(u.params.w);

    // Blur stage: accumulate Gaussian falloff around each disc edge.
    var field: f32 = 0.0;
    for (var i: u32 = 0u; i < count; i = i + 1u) {
        let disc = u.discs[i];
        if (disc.w <= 0.0) {
            continue;
        }
        let edge = distance(input.position.xy, disc.xy) - disc.z;
        var coverage: f32 = 1.0;
        if (edge > 0.0) {
            coverage = exp(-(edge * edge) / (2.0 * sigma * sigma));
        }
        field = field + coverage * disc.w;
    }

    // Color-matrix stage: hard alpha cutoff, RGB untouched.
    let alpha = clamp(field, 0.0, 1.0);
    let remapped = clamp(alpha * alpha_scale + alpha_offset, 0.0, 1.0);

    return vec4<f32>(u.color.rgb, remapped);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    fn viewport() -> Viewport {
        Viewport::with_physical_size(Size::new(390, 800), 1.0)
    }

    #[test]
    fn uniforms_fill_every_disc_slot_when_closed() {
        let primitive = GooPrimitive { progress: 0.0 };
        let bounds = Rectangle::new(iced::Point::ORIGIN, Size::new(390.0, 800.0));
        let uniforms = primitive.uniforms(&bounds, &viewport());

        // Collapsed: all satellites and the filler sit on the anchor.
        let anchor = fab_anchor(bounds);
        for disc in &uniforms.discs {
            assert!((disc[0] - anchor.x).abs() < 1e-3);
            assert!((disc[1] - anchor.y).abs() < 1e-3);
            assert_eq!(disc[3], 1.0);
        }
    }

    #[test]
    fn open_layout_spreads_the_satellites() {
        let primitive = GooPrimitive { progress: 1.0 };
        let bounds = Rectangle::new(iced::Point::ORIGIN, Size::new(390.0, 800.0));
        let uniforms = primitive.uniforms(&bounds, &viewport());
        let anchor = fab_anchor(bounds);

        assert!((uniforms.discs[0][0] - (anchor.x - 120.0)).abs() < 1e-3);
        assert!((uniforms.discs[1][1] - (anchor.y - 115.0)).abs() < 1e-3);
        assert!((uniforms.discs[2][0] - (anchor.x + 120.0)).abs() < 1e-3);
        // The filler has shrunk away entirely.
        assert_eq!(uniforms.discs[3][2], 0.0);
        assert_eq!(uniforms.discs[3][3], 0.0);
    }

    #[test]
    fn params_carry_the_effect_constants() {
        let primitive = GooPrimitive { progress: 0.5 };
        let bounds = Rectangle::new(iced::Point::ORIGIN, Size::new(390.0, 800.0));
        let uniforms = primitive.uniforms(&bounds, &viewport());

        let effect = RenderEffect::goo();
        assert!((uniforms.params[0] - effect.blur.radius_x / 3.0).abs() < 1e-4);
        assert_eq!(uniforms.params[1], 50.0);
        assert!((uniforms.params[2] - (-5000.0 / 255.0)).abs() < 1e-4);
        assert_eq!(uniforms.params[3], MAX_DISCS as f32);
    }

    #[test]
    fn scale_factor_converts_to_physical_pixels() {
        let primitive = GooPrimitive { progress: 0.0 };
        let bounds = Rectangle::new(iced::Point::ORIGIN, Size::new(390.0, 800.0));
        let hidpi = Viewport::with_physical_size(Size::new(780, 1600), 2.0);
        let uniforms = primitive.uniforms(&bounds, &hidpi);
        let anchor = fab_anchor(bounds);

        assert!((uniforms.discs[0][0] - anchor.x * 2.0).abs() < 1e-3);
        assert!((uniforms.discs[0][2] - 56.0 / 2.0 * 1.10 * 2.0).abs() < 1e-3);
    }
}
