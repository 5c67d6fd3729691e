//! Capabilities the draw needs from whatever holds the form

/// Supplies the pool of values eligible to be drawn
#[cfg_attr(test, mockall::automock)]
pub trait CandidateProvider {
    /// Looked up on every draw, never cached between draws
    fn list_candidates(&self) -> Vec<String>;
}

/// A destination field receiving a drawn value
pub trait Slot {
    fn value(&self) -> &str;
    fn set_value(&mut self, value: &str);
}

/// Supplies the destination fields in their display order
pub trait SlotProvider {
    fn list_slots(&mut self) -> Vec<&mut dyn Slot>;
}

impl Slot for String {
    fn value(&self) -> &str {
        self
    }

    fn set_value(&mut self, value: &str) {
        self.clear();
        self.push_str(value);
    }
}

impl CandidateProvider for Vec<String> {
    fn list_candidates(&self) -> Vec<String> {
        self.clone()
    }
}

impl SlotProvider for Vec<String> {
    fn list_slots(&mut self) -> Vec<&mut dyn Slot> {
        self.iter_mut().map(|s| s as &mut dyn Slot).collect()
    }
}

impl<P: CandidateProvider + ?Sized> CandidateProvider for &P {
    fn list_candidates(&self) -> Vec<String> {
        (**self).list_candidates()
    }
}

impl<P: SlotProvider + ?Sized> SlotProvider for &mut P {
    fn list_slots(&mut self) -> Vec<&mut dyn Slot> {
        (**self).list_slots()
    }
}
