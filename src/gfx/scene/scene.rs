use super::{
    material::{HasColorableMaterial, Material, MaterialId},
    object::{Object, ObjectId},
};
use crate::gfx::color::Color;

/// Ordered collection of objects and the materials they reference
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<Object>,
    materials: Vec<Material>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a material and returns the handle objects use to reference it
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    /// Appends an object; children keep insertion order
    pub fn add(&mut self, object: Object) -> ObjectId {
        debug_assert!(
            object.material.0 < self.materials.len(),
            "object '{}' references a material that is not in this scene",
            object.name
        );
        self.objects.push(object);
        ObjectId(self.objects.len() - 1)
    }

    pub fn children(&self) -> &[Object] {
        &self.objects
    }

    pub fn children_with_ids(&self) -> impl Iterator<Item = (ObjectId, &Object)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(index, object)| (ObjectId(index), object))
    }

    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id.0)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        self.objects.get_mut(id.0)
    }

    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0)
    }

    pub fn material_mut(&mut self, id: MaterialId) -> Option<&mut Material> {
        self.materials.get_mut(id.0)
    }

    /// Material assigned to `object`
    pub fn material_for(&self, object: &Object) -> Option<&Material> {
        self.material(object.material)
    }

    /// The object's material if it can be recolored
    pub fn colorable_material_of(&self, id: ObjectId) -> Option<MaterialId> {
        let object = self.object(id)?;
        self.material(object.material)?
            .color()
            .map(|_| object.material)
    }

    /// Sets the color of every listed material that supports it.
    ///
    /// Returns how many materials changed color.
    pub fn recolor(&mut self, targets: &[MaterialId], color: Color) -> usize {
        let mut changed = 0;
        for id in targets {
            if let Some(material) = self.materials.get_mut(id.0) {
                if material.set_color(color) {
                    changed += 1;
                }
            }
        }
        changed
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Drops every object and material
    pub fn clear(&mut self) {
        self.objects.clear();
        self.materials.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::generate_cube;

    #[test]
    fn test_add_keeps_order() {
        let mut scene = Scene::new();
        let material = scene.add_material(Material::basic(0x00ff00));
        let first = scene.add(Object::new("a", generate_cube(), material));
        let second = scene.add(Object::new("b", generate_cube(), material));

        let names: Vec<_> = scene.children().iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
    }

    #[test]
    fn test_colorable_material_lookup() {
        let mut scene = Scene::new();
        let basic = scene.add_material(Material::basic(0x00ff00));
        let normal = scene.add_material(Material::Normal);
        let cube = scene.add(Object::new("cube", generate_cube(), basic));
        let other = scene.add(Object::new("other", generate_cube(), normal));

        assert_eq!(scene.colorable_material_of(cube), Some(basic));
        assert_eq!(scene.colorable_material_of(other), None);
    }

    #[test]
    fn test_recolor_skips_non_colorable() {
        let mut scene = Scene::new();
        let basic = scene.add_material(Material::basic(0x00ff00));
        let normal = scene.add_material(Material::Normal);

        assert_eq!(scene.recolor(&[basic, normal], Color::RED), 1);
        assert_eq!(scene.material(basic).unwrap().color(), Some(Color::RED));
        assert_eq!(scene.material(normal), Some(&Material::Normal));
    }

    #[test]
    fn test_recolor_ignores_unknown_ids() {
        let mut scene = Scene::new();
        let basic = scene.add_material(Material::basic(0x00ff00));

        assert_eq!(scene.recolor(&[MaterialId(7), basic], Color::RED), 1);
        assert_eq!(scene.recolor(&[], Color::GREEN), 0);
        assert_eq!(scene.material(basic).unwrap().color(), Some(Color::RED));
    }

    #[test]
    fn test_clear() {
        let mut scene = Scene::new();
        let material = scene.add_material(Material::basic(0x00ff00));
        scene.add(Object::new("cube", generate_cube(), material));
        scene.clear();
        assert!(scene.is_empty());
        assert!(scene.material(material).is_none());
    }
}
