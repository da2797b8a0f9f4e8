/// WGSL shader for the core wireframe, inner solid, and rings. Unlit color
/// with exponential-squared fog by view distance.
pub const SCENE_SHADER: &str = r#"
struct Globals {
    view: mat4x4<f32>,
    proj: mat4x4<f32>,
    // rgb = fog color, w = fog density
    fog: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> globals: Globals;

struct VertexInput {
    @location(0) position: vec3<f32>,
};

struct InstanceInput {
    @location(1) model_0: vec4<f32>,
    @location(2) model_1: vec4<f32>,
    @location(3) model_2: vec4<f32>,
    @location(4) model_3: vec4<f32>,
    @location(5) color: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
    @location(1) view_dist: f32,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let model = mat4x4<f32>(
        instance.model_0,
        instance.model_1,
        instance.model_2,
        instance.model_3,
    );
    let view_pos = globals.view * model * vec4<f32>(vertex.position, 1.0);

    var out: VertexOutput;
    out.clip_position = globals.proj * view_pos;
    out.color = instance.color;
    out.view_dist = length(view_pos.xyz);
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let density = globals.fog.w;
    let fog_factor = clamp(exp(-density * density * in.view_dist * in.view_dist), 0.0, 1.0);
    let rgb = mix(globals.fog.rgb, in.color.rgb, fog_factor);
    return vec4<f32>(rgb, in.color.a);
}
"#;

/// WGSL shader for the starfield: camera-facing quads expanded in view space,
/// one instance per point, additively blended.
pub const PARTICLE_SHADER: &str = r#"
struct Globals {
    view: mat4x4<f32>,
    proj: mat4x4<f32>,
    fog: vec4<f32>,
};

struct FieldParams {
    model: mat4x4<f32>,
    // rgb = tint, w = opacity
    tint: vec4<f32>,
    // x = point size, yzw unused
    size: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> globals: Globals;

@group(0) @binding(1)
var<uniform> field: FieldParams;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) view_dist: f32,
};

@vertex
fn vs_particle(
    @location(0) corner: vec2<f32>,
    @location(1) star: vec3<f32>,
) -> VertexOutput {
    var view_pos = globals.view * field.model * vec4<f32>(star, 1.0);
    view_pos = vec4<f32>(view_pos.xy + corner * field.size.x, view_pos.zw);

    var out: VertexOutput;
    out.clip_position = globals.proj * view_pos;
    out.view_dist = length(view_pos.xyz);
    return out;
}

@fragment
fn fs_particle(in: VertexOutput) -> @location(0) vec4<f32> {
    let density = globals.fog.w;
    let fog_factor = clamp(exp(-density * density * in.view_dist * in.view_dist), 0.0, 1.0);
    return vec4<f32>(field.tint.rgb * fog_factor, field.tint.w);
}
"#;
