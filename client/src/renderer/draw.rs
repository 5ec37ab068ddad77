use super::resources::InstanceData;
use super::Renderer;
use wgpu::*;

fn to_wgpu(color: game_core::Color) -> Color {
    let [r, g, b, a] = color.to_f32();
    Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}

/// Submit the current frame list. Frames whose surface texture cannot be
/// acquired are dropped.
pub fn draw_frame(renderer: &mut Renderer) {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            tracing::warn!("surface lost or outdated, reconfiguring");
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return;
        }
        Err(err) => {
            tracing::warn!(%err, "skipping frame");
            return;
        }
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());

    let text_instances = update_buffers(renderer);

    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });
    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(to_wgpu(renderer.frame.clear)),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        draw_shapes(renderer, &mut pass);
        draw_text(renderer, &mut pass, &text_instances);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();
}

/// Upload this frame's instances. Returns the indices of the text draws that
/// have something to show, in instance order.
fn update_buffers(renderer: &mut Renderer) -> Vec<usize> {
    let keys: Vec<_> = renderer.frame.texts.iter().map(|t| t.key.clone()).collect();
    for key in &keys {
        renderer.prepare_text(key);
    }

    let mut text_data = Vec::new();
    let mut visible = Vec::new();
    for (i, draw) in renderer.frame.texts.iter().enumerate() {
        if let Some(Some(texture)) = renderer.text_cache.get(&draw.key) {
            text_data.push(InstanceData::quad(
                draw.x as f32,
                draw.y as f32,
                texture.width as f32,
                texture.height as f32,
                draw.color,
            ));
            visible.push(i);
        }
    }

    let Renderer {
        device,
        queue,
        buffers,
        frame,
        ..
    } = renderer;
    buffers.rects.upload(device, queue, &frame.rects);
    buffers.circles.upload(device, queue, &frame.circles);
    buffers.text.upload(device, queue, &text_data);

    visible
}

fn draw_shapes(renderer: &Renderer, pass: &mut RenderPass<'_>) {
    pass.set_pipeline(&renderer.shape_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    // Rects (Paddles)
    let rect_count = renderer.frame.rects.len() as u32;
    if rect_count > 0 {
        let mesh = &renderer.meshes.0;
        pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint16);
        pass.set_vertex_buffer(1, renderer.buffers.rects.buffer.slice(..));
        pass.draw_indexed(0..mesh.index_count, 0, 0..rect_count);
    }

    // Circle (Ball)
    let circle_count = renderer.frame.circles.len() as u32;
    if circle_count > 0 {
        let mesh = &renderer.meshes.1;
        pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint16);
        pass.set_vertex_buffer(1, renderer.buffers.circles.buffer.slice(..));
        pass.draw_indexed(0..mesh.index_count, 0, 0..circle_count);
    }
}

fn draw_text(renderer: &Renderer, pass: &mut RenderPass<'_>, visible: &[usize]) {
    if visible.is_empty() {
        return;
    }

    let mesh = &renderer.meshes.0;
    pass.set_pipeline(&renderer.text_pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);
    pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
    pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, renderer.buffers.text.buffer.slice(..));

    for (instance, &i) in visible.iter().enumerate() {
        let key = &renderer.frame.texts[i].key;
        if let Some(Some(texture)) = renderer.text_cache.get(key) {
            let instance = instance as u32;
            pass.set_bind_group(1, &texture.bind_group, &[]);
            pass.draw_indexed(0..mesh.index_count, 0, instance..instance + 1);
        }
    }
}
