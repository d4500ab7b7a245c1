/// Vertex shader for the foliage point cloud. The morph happens here: both
/// target positions travel as attributes and `u_progress` selects the blend.
pub const FOLIAGE_VERTEX_SHADER: &str = r#"#version 300 es
precision highp float;

layout(location = 0) in vec3 a_tree_position;
layout(location = 1) in vec3 a_scatter_position;
layout(location = 2) in float a_random;

uniform mat4 u_model;
uniform mat4 u_view;
uniform mat4 u_projection;
uniform float u_time;
uniform float u_progress;

out float v_random;

float ease_in_out_cubic(float x) {
    return x < 0.5 ? 4.0 * x * x * x : 1.0 - pow(-2.0 * x + 2.0, 3.0) / 2.0;
}

void main() {
    v_random = a_random;

    float eased = ease_in_out_cubic(u_progress);
    vec3 target = mix(a_scatter_position, a_tree_position, eased);

    // Breathing drift, strong while scattered, nearly still when assembled
    float wobble = sin(u_time * 2.0 + a_random * 10.0) * 0.1;
    float strength = mix(0.2, 0.05, eased);
    target += vec3(wobble * strength);

    vec4 view_pos = u_view * u_model * vec4(target, 1.0);
    gl_Position = u_projection * view_pos;

    // Size attenuation with distance
    gl_PointSize = (40.0 * a_random + 20.0) * (1.0 / -view_pos.z);
}
"#;

/// Fragment shader for the foliage points: soft glowing discs, a sparse gold
/// sprinkle over the emerald body, additive-friendly alpha
pub const FOLIAGE_FRAGMENT_SHADER: &str = r#"#version 300 es
precision highp float;

uniform vec3 u_color_emerald;
uniform vec3 u_color_gold;

in float v_random;

out vec4 frag_color;

void main() {
    vec2 center = gl_PointCoord - 0.5;
    float dist = length(center);
    float alpha = 1.0 - smoothstep(0.3, 0.5, dist);

    if (alpha < 0.01) {
        discard;
    }

    // Top decile of the random attribute renders gold
    vec3 color = mix(u_color_emerald, u_color_gold, step(0.9, v_random));

    // Glowing core
    color += vec3(0.2) * (1.0 - dist * 2.0);

    frag_color = vec4(color, alpha * 0.9);
}
"#;

/// Vertex shader for instanced ornaments. Each instance carries its model
/// matrix as four vec4 attributes plus an RGB tint.
pub const ORNAMENT_VERTEX_SHADER: &str = r#"#version 300 es
precision highp float;

layout(location = 0) in vec3 a_position;
layout(location = 1) in vec3 a_normal;
layout(location = 2) in vec4 a_model_col0;
layout(location = 3) in vec4 a_model_col1;
layout(location = 4) in vec4 a_model_col2;
layout(location = 5) in vec4 a_model_col3;
layout(location = 6) in vec3 a_color;

uniform mat4 u_scene;
uniform mat4 u_view;
uniform mat4 u_projection;

out vec3 v_normal;
out vec3 v_world_position;
out vec3 v_color;

void main() {
    mat4 model = mat4(a_model_col0, a_model_col1, a_model_col2, a_model_col3);
    vec4 world_pos = u_scene * model * vec4(a_position, 1.0);

    // Uniform instance scale, so the normal transform is the rotation itself
    v_normal = mat3(u_scene) * mat3(model) * a_normal;
    v_world_position = world_pos.xyz;
    v_color = a_color;

    gl_Position = u_projection * u_view * world_pos;
}
"#;

/// Fragment shader for ornaments: gold key light from above-right, emerald
/// rim, glossy specular, tone map and gamma
pub const ORNAMENT_FRAGMENT_SHADER: &str = r#"#version 300 es
precision highp float;

in vec3 v_normal;
in vec3 v_world_position;
in vec3 v_color;

uniform vec3 u_camera_pos;
uniform vec3 u_key_color;
uniform vec3 u_rim_color;

out vec4 frag_color;

void main() {
    vec3 normal = normalize(v_normal);
    vec3 view_dir = normalize(u_camera_pos - v_world_position);

    vec3 key_dir = normalize(vec3(0.5, 1.0, 0.3));
    float ndotl = max(dot(normal, key_dir), 0.0);
    vec3 diffuse = v_color * ndotl * u_key_color;

    // Emerald accent from the opposite side
    vec3 rim_dir = normalize(vec3(-0.6, 0.3, -0.4));
    float rim_ndotl = max(dot(normal, rim_dir), 0.0);
    float rim = pow(1.0 - max(dot(normal, view_dir), 0.0), 3.0);
    vec3 rim_light = u_rim_color * (rim * 0.4 + rim_ndotl * 0.15);

    // Glossy highlight, metallic ornaments read through the specular
    vec3 half_dir = normalize(key_dir + view_dir);
    float spec = pow(max(dot(normal, half_dir), 0.0), 48.0);
    vec3 specular = u_key_color * spec * 0.8;

    vec3 ambient = v_color * 0.12;
    vec3 final_color = ambient + diffuse + rim_light + specular;

    // Tone mapping
    final_color = final_color / (final_color + vec3(1.0));

    // Gamma correction
    final_color = pow(final_color, vec3(1.0 / 2.2));

    frag_color = vec4(final_color, 1.0);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shaders_not_empty() {
        assert!(!FOLIAGE_VERTEX_SHADER.is_empty());
        assert!(!FOLIAGE_FRAGMENT_SHADER.is_empty());
        assert!(!ORNAMENT_VERTEX_SHADER.is_empty());
        assert!(!ORNAMENT_FRAGMENT_SHADER.is_empty());
    }

    #[test]
    fn test_shader_version() {
        for src in [
            FOLIAGE_VERTEX_SHADER,
            FOLIAGE_FRAGMENT_SHADER,
            ORNAMENT_VERTEX_SHADER,
            ORNAMENT_FRAGMENT_SHADER,
        ] {
            assert!(src.starts_with("#version 300 es"));
        }
    }

    #[test]
    fn test_foliage_vertex_shader_declares_morph_inputs() {
        assert!(FOLIAGE_VERTEX_SHADER.contains("a_tree_position"));
        assert!(FOLIAGE_VERTEX_SHADER.contains("a_scatter_position"));
        assert!(FOLIAGE_VERTEX_SHADER.contains("u_progress"));
    }
}
