use web_sys::{
    WebGl2RenderingContext, WebGlBuffer, WebGlProgram, WebGlUniformLocation,
    WebGlVertexArrayObject,
};

use super::shaders::*;
use super::webgl::WebGLContext;
use crate::config::Palette;
use crate::math::{Mat4, Vec3};
use crate::mesh::Mesh;
use crate::scene::{FoliageCloud, OrnamentKind, OrnamentSet};

/// Cached uniform locations for the foliage point shader
struct FoliageUniforms {
    model: Option<WebGlUniformLocation>,
    view: Option<WebGlUniformLocation>,
    projection: Option<WebGlUniformLocation>,
    time: Option<WebGlUniformLocation>,
    progress: Option<WebGlUniformLocation>,
    color_emerald: Option<WebGlUniformLocation>,
    color_gold: Option<WebGlUniformLocation>,
}

/// Cached uniform locations for the ornament shader
struct OrnamentUniforms {
    scene: Option<WebGlUniformLocation>,
    view: Option<WebGlUniformLocation>,
    projection: Option<WebGlUniformLocation>,
    camera_pos: Option<WebGlUniformLocation>,
    key_color: Option<WebGlUniformLocation>,
    rim_color: Option<WebGlUniformLocation>,
}

/// One instanced mesh (baubles or gifts) with its dynamic instance buffer
struct InstancedBatch {
    vao: WebGlVertexArrayObject,
    // VAO keeps these alive in spirit; held so the GC handles stay valid
    _vertex_buffer: WebGlBuffer,
    _index_buffer: WebGlBuffer,
    instance_buffer: WebGlBuffer,
    index_count: i32,
    instance_count: i32,
}

/// Two-pass render pipeline: lit instanced ornaments, then additive foliage
/// points on top with depth writes off
pub struct RenderPipeline {
    ctx: WebGLContext,

    foliage_program: WebGlProgram,
    ornament_program: WebGlProgram,

    foliage_uniforms: FoliageUniforms,
    ornament_uniforms: OrnamentUniforms,

    foliage_vao: Option<WebGlVertexArrayObject>,
    _foliage_buffer: Option<WebGlBuffer>,
    foliage_count: i32,

    baubles: Option<InstancedBatch>,
    gifts: Option<InstancedBatch>,

    width: i32,
    height: i32,

    background: Vec3,
    color_emerald: Vec3,
    color_gold: Vec3,
    key_color: Vec3,
    rim_color: Vec3,

    morph_progress: f32,

    pub camera_position: Vec3,
    pub camera_target: Vec3,
    pub fov: f32,
    /// Whole-scene offset so the tree sits slightly below eye level
    pub scene_offset: Vec3,
}

impl RenderPipeline {
    pub fn new(
        gl: WebGl2RenderingContext,
        width: i32,
        height: i32,
        palette: &Palette,
    ) -> Result<Self, String> {
        let ctx = WebGLContext::new(gl);

        let foliage_program = ctx.create_program(FOLIAGE_VERTEX_SHADER, FOLIAGE_FRAGMENT_SHADER)?;
        let ornament_program =
            ctx.create_program(ORNAMENT_VERTEX_SHADER, ORNAMENT_FRAGMENT_SHADER)?;

        let foliage_uniforms = FoliageUniforms {
            model: ctx.get_uniform_location(&foliage_program, "u_model"),
            view: ctx.get_uniform_location(&foliage_program, "u_view"),
            projection: ctx.get_uniform_location(&foliage_program, "u_projection"),
            time: ctx.get_uniform_location(&foliage_program, "u_time"),
            progress: ctx.get_uniform_location(&foliage_program, "u_progress"),
            color_emerald: ctx.get_uniform_location(&foliage_program, "u_color_emerald"),
            color_gold: ctx.get_uniform_location(&foliage_program, "u_color_gold"),
        };

        let ornament_uniforms = OrnamentUniforms {
            scene: ctx.get_uniform_location(&ornament_program, "u_scene"),
            view: ctx.get_uniform_location(&ornament_program, "u_view"),
            projection: ctx.get_uniform_location(&ornament_program, "u_projection"),
            camera_pos: ctx.get_uniform_location(&ornament_program, "u_camera_pos"),
            key_color: ctx.get_uniform_location(&ornament_program, "u_key_color"),
            rim_color: ctx.get_uniform_location(&ornament_program, "u_rim_color"),
        };

        Ok(Self {
            ctx,
            foliage_program,
            ornament_program,
            foliage_uniforms,
            ornament_uniforms,
            foliage_vao: None,
            _foliage_buffer: None,
            foliage_count: 0,
            baubles: None,
            gifts: None,
            width,
            height,
            background: palette.background,
            color_emerald: palette.emerald,
            color_gold: palette.gold,
            key_color: palette.gold_pale,
            rim_color: palette.emerald,
            morph_progress: 0.0,
            camera_position: Vec3::new(0.0, 2.0, 35.0),
            camera_target: Vec3::ZERO,
            fov: 45.0f32.to_radians(),
            scene_offset: Vec3::new(0.0, -2.0, 0.0),
        })
    }

    /// Raw morph progress for the foliage shader; eased in GLSL
    pub fn set_morph_progress(&mut self, progress: f32) {
        self.morph_progress = progress.clamp(0.0, 1.0);
    }

    /// Upload the static foliage vertex stream.
    /// Layout: tree position(3) + scatter position(3) + random(1)
    pub fn upload_foliage(&mut self, cloud: &FoliageCloud) -> Result<(), String> {
        let gl = &self.ctx.gl;

        let vao = self.ctx.create_vao()?;
        gl.bind_vertex_array(Some(&vao));

        let buffer = self
            .ctx
            .create_buffer_f32(cloud.vertex_data(), WebGl2RenderingContext::STATIC_DRAW)?;

        let stride = (FoliageCloud::FLOATS_PER_PARTICLE * 4) as i32;
        gl.bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, Some(&buffer));

        // Tree position (location 0)
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_with_i32(0, 3, WebGl2RenderingContext::FLOAT, false, stride, 0);

        // Scatter position (location 1)
        gl.enable_vertex_attrib_array(1);
        gl.vertex_attrib_pointer_with_i32(1, 3, WebGl2RenderingContext::FLOAT, false, stride, 12);

        // Random scalar (location 2)
        gl.enable_vertex_attrib_array(2);
        gl.vertex_attrib_pointer_with_i32(2, 1, WebGl2RenderingContext::FLOAT, false, stride, 24);

        gl.bind_vertex_array(None);

        self.foliage_vao = Some(vao);
        self._foliage_buffer = Some(buffer);
        self.foliage_count = cloud.count() as i32;

        Ok(())
    }

    /// Create the instanced batches for both ornament kinds
    pub fn upload_ornaments(
        &mut self,
        bauble_mesh: &Mesh,
        gift_mesh: &Mesh,
        set: &OrnamentSet,
    ) -> Result<(), String> {
        self.baubles = Some(self.create_batch(bauble_mesh, set.baubles().len())?);
        self.gifts = Some(self.create_batch(gift_mesh, set.gifts().len())?);
        Ok(())
    }

    fn create_batch(&self, mesh: &Mesh, max_instances: usize) -> Result<InstancedBatch, String> {
        let gl = &self.ctx.gl;

        let vao = self.ctx.create_vao()?;
        gl.bind_vertex_array(Some(&vao));

        // Static mesh geometry: position(3) + normal(3)
        let vertex_data = mesh.vertex_data();
        let vertex_buffer = self
            .ctx
            .create_buffer_f32(&vertex_data, WebGl2RenderingContext::STATIC_DRAW)?;
        let index_buffer = self
            .ctx
            .create_index_buffer(mesh.index_data(), WebGl2RenderingContext::STATIC_DRAW)?;

        gl.bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, Some(&vertex_buffer));
        gl.bind_buffer(WebGl2RenderingContext::ELEMENT_ARRAY_BUFFER, Some(&index_buffer));

        let mesh_stride = 6 * 4;
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_with_i32(0, 3, WebGl2RenderingContext::FLOAT, false, mesh_stride, 0);
        gl.enable_vertex_attrib_array(1);
        gl.vertex_attrib_pointer_with_i32(1, 3, WebGl2RenderingContext::FLOAT, false, mesh_stride, 12);

        // Dynamic instance stream: model matrix (4 x vec4) + color(3)
        let zeroed = vec![0.0f32; max_instances * OrnamentSet::FLOATS_PER_INSTANCE];
        let instance_buffer = self
            .ctx
            .create_buffer_f32(&zeroed, WebGl2RenderingContext::DYNAMIC_DRAW)?;

        gl.bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, Some(&instance_buffer));
        let instance_stride = (OrnamentSet::FLOATS_PER_INSTANCE * 4) as i32;

        for col in 0..4u32 {
            let location = 2 + col;
            gl.enable_vertex_attrib_array(location);
            gl.vertex_attrib_pointer_with_i32(
                location,
                4,
                WebGl2RenderingContext::FLOAT,
                false,
                instance_stride,
                (col * 16) as i32,
            );
            gl.vertex_attrib_divisor(location, 1);
        }

        gl.enable_vertex_attrib_array(6);
        gl.vertex_attrib_pointer_with_i32(
            6,
            3,
            WebGl2RenderingContext::FLOAT,
            false,
            instance_stride,
            64,
        );
        gl.vertex_attrib_divisor(6, 1);

        gl.bind_vertex_array(None);

        Ok(InstancedBatch {
            vao,
            _vertex_buffer: vertex_buffer,
            _index_buffer: index_buffer,
            instance_buffer,
            index_count: mesh.index_data().len() as i32,
            instance_count: 0,
        })
    }

    /// Push this frame's instance matrices for one ornament kind
    pub fn update_instances(&mut self, kind: OrnamentKind, data: &[f32]) {
        let batch = match kind {
            OrnamentKind::Bauble => self.baubles.as_mut(),
            OrnamentKind::Gift => self.gifts.as_mut(),
        };
        if let Some(batch) = batch {
            self.ctx.update_buffer_f32(&batch.instance_buffer, data);
            batch.instance_count = (data.len() / OrnamentSet::FLOATS_PER_INSTANCE) as i32;
        }
    }

    /// Render a frame
    pub fn render(&self, time: f32) {
        let gl = &self.ctx.gl;

        let aspect = self.width as f32 / self.height as f32;
        let projection = Mat4::perspective(self.fov, aspect, 0.1, 200.0);
        let view = Mat4::look_at(self.camera_position, self.camera_target, Vec3::UP);
        let scene = Mat4::translation(self.scene_offset);

        self.ctx.viewport(0, 0, self.width, self.height);
        self.ctx.clear(self.background.x, self.background.y, self.background.z, 1.0);

        // === Pass 1: lit ornaments, depth-tested, opaque ===
        self.ctx.enable_depth_test();
        gl.disable(WebGl2RenderingContext::BLEND);
        gl.use_program(Some(&self.ornament_program));

        self.ctx.uniform_matrix4fv(self.ornament_uniforms.scene.as_ref(), scene.as_slice());
        self.ctx.uniform_matrix4fv(self.ornament_uniforms.view.as_ref(), view.as_slice());
        self.ctx.uniform_matrix4fv(
            self.ornament_uniforms.projection.as_ref(),
            projection.as_slice(),
        );
        self.ctx.uniform_3f(
            self.ornament_uniforms.camera_pos.as_ref(),
            self.camera_position.x,
            self.camera_position.y,
            self.camera_position.z,
        );
        self.ctx.uniform_3f(
            self.ornament_uniforms.key_color.as_ref(),
            self.key_color.x,
            self.key_color.y,
            self.key_color.z,
        );
        self.ctx.uniform_3f(
            self.ornament_uniforms.rim_color.as_ref(),
            self.rim_color.x,
            self.rim_color.y,
            self.rim_color.z,
        );

        for batch in [self.baubles.as_ref(), self.gifts.as_ref()].into_iter().flatten() {
            if batch.instance_count == 0 {
                continue;
            }
            gl.bind_vertex_array(Some(&batch.vao));
            gl.draw_elements_instanced_with_i32(
                WebGl2RenderingContext::TRIANGLES,
                batch.index_count,
                WebGl2RenderingContext::UNSIGNED_INT,
                0,
                batch.instance_count,
            );
        }

        // === Pass 2: foliage points, additive, no depth writes ===
        if self.foliage_vao.is_some() && self.foliage_count > 0 {
            gl.use_program(Some(&self.foliage_program));
            gl.depth_mask(false);
            self.ctx.enable_additive_blending();

            self.ctx.uniform_matrix4fv(self.foliage_uniforms.model.as_ref(), scene.as_slice());
            self.ctx.uniform_matrix4fv(self.foliage_uniforms.view.as_ref(), view.as_slice());
            self.ctx.uniform_matrix4fv(
                self.foliage_uniforms.projection.as_ref(),
                projection.as_slice(),
            );
            self.ctx.uniform_1f(self.foliage_uniforms.time.as_ref(), time);
            self.ctx.uniform_1f(self.foliage_uniforms.progress.as_ref(), self.morph_progress);
            self.ctx.uniform_3f(
                self.foliage_uniforms.color_emerald.as_ref(),
                self.color_emerald.x,
                self.color_emerald.y,
                self.color_emerald.z,
            );
            self.ctx.uniform_3f(
                self.foliage_uniforms.color_gold.as_ref(),
                self.color_gold.x,
                self.color_gold.y,
                self.color_gold.z,
            );

            gl.bind_vertex_array(self.foliage_vao.as_ref());
            gl.draw_arrays(WebGl2RenderingContext::POINTS, 0, self.foliage_count);

            gl.depth_mask(true);
            gl.disable(WebGl2RenderingContext::BLEND);
        }
    }

    /// Resize the drawing surface
    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width.max(1);
        self.height = height.max(1);
    }
}
