use pdf_writer::Ref;
use std::collections::HashMap;

/// The role an object reference plays within the generated PDF.
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum RefType {
    Catalog,
    Info,
    PageTree,
    Page(usize),
    ContentForPage(usize),
    Font(usize),
    CidFont(usize),
    FontDescriptor(usize),
    FontData(usize),
    ToUnicode(usize),
    Image(usize),
    ImageMask(usize),
}

/// Allocates and remembers object ids so that objects written at different
/// times can refer to each other.
pub struct ObjectReferences {
    refs: HashMap<RefType, Ref>,
    next_id: i32,
}

impl ObjectReferences {
    pub fn new() -> ObjectReferences {
        ObjectReferences {
            refs: HashMap::new(),
            next_id: 1,
        }
    }

    pub fn gen(&mut self, ref_type: RefType) -> Ref {
        let id = Ref::new(self.next_id);
        self.next_id += 1;
        self.refs.insert(ref_type, id);
        id
    }

    pub fn get(&self, ref_type: RefType) -> Option<Ref> {
        self.refs.get(&ref_type).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_refs_are_unique_and_recallable() {
        let mut refs = ObjectReferences::new();
        let a = refs.gen(RefType::Catalog);
        let b = refs.gen(RefType::Page(0));
        assert_ne!(a, b);
        assert_eq!(refs.get(RefType::Catalog), Some(a));
        assert_eq!(refs.get(RefType::Page(1)), None);
    }
}
