use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::Indices;
use bevy::render::render_resource::PrimitiveTopology;

use crate::core::components::BodyVisual;

/// Fill mesh for an outline body: local points plus their triangulation.
pub fn outline_mesh(points: &[Vec2], triangles: &[[u32; 3]]) -> Mesh {
    let positions: Vec<[f32; 3]> = points.iter().map(|p| [p.x, p.y, 0.0]).collect();
    let normals = vec![[0.0, 0.0, 1.0]; points.len()];
    let indices: Vec<u32> = triangles.iter().flatten().copied().collect();
    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_indices(Indices::U32(indices))
}

/// Turn freshly spawned `BodyVisual`s into meshes or sprites on the same entity.
pub fn attach_body_visuals(
    mut commands: Commands,
    added: Query<(Entity, &BodyVisual), Added<BodyVisual>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    asset_server: Res<AssetServer>,
) {
    for (entity, visual) in added.iter() {
        match visual {
            BodyVisual::Circle { radius, fill, .. } => {
                commands.entity(entity).insert((
                    Mesh2d(meshes.add(Circle::new(*radius))),
                    MeshMaterial2d(materials.add(*fill)),
                ));
            }
            BodyVisual::Texture {
                path,
                radius,
                scale,
            } => {
                // load failures are reported by the asset server
                commands.entity(entity).insert(Sprite {
                    image: asset_server.load(path.clone()),
                    custom_size: Some(Vec2::splat(radius * 2.0 * scale)),
                    ..default()
                });
            }
            BodyVisual::Outline {
                points,
                triangles,
                fill,
                ..
            } => {
                if triangles.is_empty() {
                    // stroke only
                    continue;
                }
                commands.entity(entity).insert((
                    Mesh2d(meshes.add(outline_mesh(points, triangles))),
                    MeshMaterial2d(materials.add(*fill)),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_mesh_has_one_vertex_per_point() {
        let pts = [Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y];
        let mesh = outline_mesh(&pts, &[[0, 1, 2], [0, 2, 3]]);
        assert_eq!(mesh.count_vertices(), 4);
        assert_eq!(mesh.indices().map(|i| i.len()), Some(6));
    }
}
