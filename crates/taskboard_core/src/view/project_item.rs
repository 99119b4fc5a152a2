//! Draggable list item for one project.

use crate::model::project::{ProjectId, ProjectRecord};
use crate::view::drag::{DragEvent, DragSource, DropEffect, DRAG_PAYLOAD_TYPE};
use log::debug;

/// Rendered entry of a category list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    project: ProjectRecord,
}

impl ProjectItem {
    pub fn new(project: ProjectRecord) -> Self {
        Self { project }
    }

    pub fn project(&self) -> &ProjectRecord {
        &self.project
    }

    pub fn id(&self) -> ProjectId {
        self.project.id
    }

    /// Element id of the rendered item. Equals the project id.
    pub fn element_id(&self) -> String {
        self.project.id.to_string()
    }

    /// Assignment summary shown under the title.
    pub fn persons_label(&self) -> String {
        match self.project.people_count {
            1 => "1 person assigned".to_string(),
            count => format!("{count} persons assigned"),
        }
    }
}

impl DragSource for ProjectItem {
    fn drag_start(&self, event: &mut DragEvent) {
        let transfer = event.data_transfer.get_or_insert_with(Default::default);
        transfer.set_data(DRAG_PAYLOAD_TYPE, self.element_id());
        transfer.effect_allowed = DropEffect::Move;
    }

    fn drag_end(&self, _event: &DragEvent) {
        debug!("event=drag_end module=item status=ok id={}", self.project.id);
    }
}

#[cfg(test)]
mod tests {
    use super::ProjectItem;
    use crate::model::project::ProjectRecord;
    use crate::view::drag::{DataTransfer, DragEvent, DragSource, DropEffect};

    #[test]
    fn persons_label_uses_singular_for_one() {
        let item = ProjectItem::new(ProjectRecord::new("t", "description", 1));
        assert_eq!(item.persons_label(), "1 person assigned");

        let item = ProjectItem::new(ProjectRecord::new("t", "description", 4));
        assert_eq!(item.persons_label(), "4 persons assigned");
        assert_eq!(item.project().people_count, 4);
    }

    #[test]
    fn drag_start_writes_id_and_move_effect() {
        let item = ProjectItem::new(ProjectRecord::new("t", "description", 2));
        let mut event = DragEvent::new(DataTransfer::new());
        item.drag_start(&mut event);

        let expected = item.id().to_string();
        assert_eq!(event.payload(), Some(expected.as_str()));
        let transfer = event.data_transfer.expect("carrier");
        assert_eq!(transfer.effect_allowed, DropEffect::Move);
        assert_eq!(transfer.types(), ["text/plain"]);
    }
}
