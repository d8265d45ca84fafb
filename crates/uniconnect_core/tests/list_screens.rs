use uniconnect_core::model::assignment::Assignment;
use uniconnect_core::model::event::EventCategory;
use uniconnect_core::model::feed::FeedKind;
use uniconnect_core::model::notice::NoticeKind;
use uniconnect_core::screens::events::EventFilter;
use uniconnect_core::screens::feed::FeedFilter;
use uniconnect_core::screens::notices::NoticeFilter;
use uniconnect_core::screens::placements::PlacementFilter;
use uniconnect_core::screens::{
    AssignmentsScreen, ClubsScreen, EventsFeedScreen, EventsScreen, NoticeBoardScreen,
    NotesScreen, PlacementsScreen,
};
use uniconnect_core::{ListStore, Record, RecordFilter};

fn assert_single_record_changed<T: Record + PartialEq + std::fmt::Debug>(
    before: &[T],
    after: &[T],
    target: u32,
) {
    assert_eq!(before.len(), after.len());
    for (old, new) in before.iter().zip(after) {
        assert_eq!(old.id(), new.id(), "order must be preserved");
        if old.id() == target {
            assert_ne!(old, new, "target record must change");
        } else {
            assert_eq!(old, new, "non-target record {} changed", old.id());
        }
    }
}

fn assert_view_is_idempotent_subset<T, F>(store: &ListStore<T>, filter: &F)
where
    T: Record + PartialEq + std::fmt::Debug,
    F: RecordFilter<T>,
{
    let first = store.view(filter);
    let second = store.view(filter);
    assert_eq!(first, second);
    assert!(first.len() <= store.len());
    for record in first {
        assert!(store.contains(record.id()));
        assert!(filter.matches(record));
    }
}

#[test]
fn every_toggle_action_changes_exactly_one_record() {
    let mut notes = NotesScreen::mount();
    let before = notes.notes().items().to_vec();
    notes.download(3);
    assert_single_record_changed(&before, notes.notes().items(), 3);

    let mut events = EventsScreen::mount();
    let before = events.events().items().to_vec();
    events.toggle_registration(4);
    assert_single_record_changed(&before, events.events().items(), 4);

    let mut assignments = AssignmentsScreen::mount();
    let before = assignments.assignments().items().to_vec();
    assignments.update_progress(2, 75);
    assert_single_record_changed(&before, assignments.assignments().items(), 2);

    let mut clubs = ClubsScreen::mount();
    let before = clubs.clubs().items().to_vec();
    clubs.request_join(4);
    clubs.confirm_join();
    assert_single_record_changed(&before, clubs.clubs().items(), 4);

    let mut placements = PlacementsScreen::mount();
    let before = placements.placements().items().to_vec();
    placements.request_application(2);
    placements.confirm_application();
    assert_single_record_changed(&before, placements.placements().items(), 2);

    let mut notices = NoticeBoardScreen::mount();
    let before = notices.notices().items().to_vec();
    notices.toggle_bookmark(6);
    assert_single_record_changed(&before, notices.notices().items(), 6);

    let mut feed = EventsFeedScreen::mount();
    let before = feed.items().items().to_vec();
    feed.toggle_complete(1);
    assert_single_record_changed(&before, feed.items().items(), 1);
}

#[test]
fn unknown_ids_leave_collections_unchanged() {
    let mut notes = NotesScreen::mount();
    let before = notes.clone();
    assert!(!notes.download(404));
    assert_eq!(notes, before);

    let mut assignments = AssignmentsScreen::mount();
    let before = assignments.clone();
    assert!(!assignments.toggle_complete(404));
    assert_eq!(assignments, before);

    let mut notices = NoticeBoardScreen::mount();
    assert!(notices.dismiss(404).is_none());
    assert_eq!(notices.notices().len(), 6);
}

#[test]
fn filters_are_idempotent_subsets() {
    let events = EventsScreen::mount();
    for filter in EventFilter::options() {
        assert_view_is_idempotent_subset(events.events(), &filter);
    }

    let notices = NoticeBoardScreen::mount();
    for filter in NoticeFilter::ALL {
        assert_view_is_idempotent_subset(notices.notices(), &filter);
    }

    let placements = PlacementsScreen::mount();
    for filter in PlacementFilter::ALL {
        assert_view_is_idempotent_subset(placements.placements(), &filter);
    }

    let feed = EventsFeedScreen::mount();
    for kind in [
        FeedKind::Assignment,
        FeedKind::Hackathon,
        FeedKind::Club,
        FeedKind::Event,
    ] {
        assert_view_is_idempotent_subset(feed.items(), &FeedFilter::Kind(kind));
    }

    let assignments = AssignmentsScreen::mount();
    let urgent = |assignment: &Assignment| assignment.urgent;
    assert_view_is_idempotent_subset(assignments.assignments(), &urgent);
}

#[test]
fn filtering_never_mutates_the_collection() {
    let mut events = EventsScreen::mount();
    let before = events.events().clone();
    events.set_filter(EventFilter::Category(EventCategory::Sports));
    assert_eq!(events.visible().len(), 1);
    assert_eq!(events.events(), &before);

    let mut notices = NoticeBoardScreen::mount();
    notices.set_filter(NoticeFilter::Kind(NoticeKind::Success));
    assert_eq!(notices.visible().len(), 1);
    assert_eq!(notices.notices().len(), 6);
}

#[test]
fn dismiss_and_delete_shrink_by_one_and_drop_the_id() {
    let mut notices = NoticeBoardScreen::mount();
    let before = notices.notices().len();
    notices.dismiss(3);
    assert_eq!(notices.notices().len(), before - 1);
    assert!(notices.visible().iter().all(|notice| notice.id != 3));

    let mut feed = EventsFeedScreen::mount();
    let before = feed.items().len();
    feed.delete(4);
    assert_eq!(feed.items().len(), before - 1);
    assert!(feed.visible().iter().all(|item| item.id != 4));
}

#[test]
fn remounting_a_screen_restores_seed_values() {
    let mut clubs = ClubsScreen::mount();
    clubs.request_join(1);
    clubs.confirm_join();
    assert_ne!(clubs, ClubsScreen::mount());
    assert_eq!(ClubsScreen::mount().clubs().get(1).unwrap().members, 234);
}
