use crate::{ImageRegistry, Mesh};

/// Data block attached to an object. Only meshes carry UV data, the other
/// kinds exist so type checks in the operations have something to reject.
pub enum ObjectData {
    Mesh(Mesh),
    Camera,
    Light,
    Empty,
}

impl ObjectData {
    /// Host-style type tag, used in reports.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ObjectData::Mesh(_) => "MESH",
            ObjectData::Camera => "CAMERA",
            ObjectData::Light => "LIGHT",
            ObjectData::Empty => "EMPTY",
        }
    }
}

pub struct Object {
    pub name: String,
    pub data: ObjectData,
}

impl Object {
    pub fn new<S: ToString>(name: S, data: ObjectData) -> Object {
        Object {
            name: name.to_string(),
            data,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        self.data.kind_name()
    }

    pub fn as_mesh(&self) -> Option<&Mesh> {
        match &self.data {
            ObjectData::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }

    pub fn as_mesh_mut(&mut self) -> Option<&mut Mesh> {
        match &mut self.data {
            ObjectData::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }
}

/// The slice of the host document the operations see: the objects, the
/// active selection and the image registry.
#[derive(Default)]
pub struct Scene {
    objects: Vec<Object>,
    active: Option<usize>,
    pub images: ImageRegistry,
}

impl Scene {
    pub fn new() -> Scene {
        Scene::default()
    }

    /// Add an object and make it the active selection, as the host does for
    /// newly created objects. Returns its index.
    pub fn add_object(&mut self, object: Object) -> usize {
        let index = self.objects.len();
        self.objects.push(object);
        self.active = Some(index);
        index
    }

    pub fn set_active(&mut self, index: usize) {
        assert!(index < self.objects.len());
        self.active = Some(index);
    }

    pub fn deselect(&mut self) {
        self.active = None;
    }

    pub fn active_object(&self) -> Option<&Object> {
        self.active.map(move |index| &self.objects[index])
    }

    pub fn active_object_mut(&mut self) -> Option<&mut Object> {
        let objects = &mut self.objects;
        self.active.map(move |index| &mut objects[index])
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn object(&self, index: usize) -> &Object {
        &self.objects[index]
    }
}
