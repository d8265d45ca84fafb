//! Built-in sample data mounted by each screen.
//!
//! Every call returns a fresh copy, so remounting a screen starts from the
//! same values.

use crate::model::assignment::Assignment;
use crate::model::club::{Club, ClubIcon};
use crate::model::event::{CampusEvent, EventCategory};
use crate::model::feed::{FeedItem, FeedKind, FeedPriority};
use crate::model::note::{Note, SharedNote};
use crate::model::notice::{Notice, NoticeKind};
use crate::model::placement::{Placement, PlacementKind};

fn note(
    id: u32,
    title: &str,
    subject: &str,
    uploaded_by: &str,
    downloads: u32,
    rating: f32,
    file_type: &str,
) -> Note {
    Note {
        id,
        title: title.to_string(),
        subject: subject.to_string(),
        uploaded_by: uploaded_by.to_string(),
        downloads,
        rating,
        file_type: file_type.to_string(),
    }
}

pub fn notes() -> Vec<Note> {
    vec![
        note(
            1,
            "Data Structures Complete Guide",
            "Computer Science",
            "Sarah Chen",
            234,
            4.8,
            "PDF",
        ),
        note(
            2,
            "Physics Notes - Quantum Mechanics",
            "Physics",
            "Mike Johnson",
            156,
            4.6,
            "DOCX",
        ),
        note(
            3,
            "UX Design Principles",
            "Design",
            "Emma Davis",
            189,
            4.9,
            "PPT",
        ),
    ]
}

fn shared_note(
    id: u32,
    title: &str,
    subject: &str,
    uploaded_by: &str,
    downloads: u32,
    upload_date: &str,
    rating: f32,
) -> SharedNote {
    SharedNote {
        id,
        title: title.to_string(),
        subject: subject.to_string(),
        uploaded_by: uploaded_by.to_string(),
        downloads,
        upload_date: upload_date.to_string(),
        rating,
    }
}

pub fn shared_notes() -> Vec<SharedNote> {
    vec![
        shared_note(
            1,
            "Data Structures - Trees & Graphs",
            "Computer Science",
            "Sarah Chen",
            145,
            "2 days ago",
            4.8,
        ),
        shared_note(
            2,
            "Calculus II - Integration Techniques",
            "Mathematics",
            "Mike Johnson",
            203,
            "1 week ago",
            4.9,
        ),
        shared_note(
            3,
            "Organic Chemistry - Reaction Mechanisms",
            "Chemistry",
            "Emma Davis",
            87,
            "3 days ago",
            4.5,
        ),
        shared_note(
            4,
            "World History - Industrial Revolution",
            "History",
            "Alex Kim",
            56,
            "5 days ago",
            4.2,
        ),
        shared_note(
            5,
            "Physics - Quantum Mechanics Notes",
            "Physics",
            "Jordan Lee",
            178,
            "1 day ago",
            4.7,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: u32,
    title: &str,
    date: &str,
    time: &str,
    location: &str,
    attendees: u32,
    category: EventCategory,
    registered: bool,
) -> CampusEvent {
    CampusEvent {
        id,
        title: title.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        location: location.to_string(),
        attendees,
        category,
        registered,
    }
}

pub fn events() -> Vec<CampusEvent> {
    vec![
        event(
            1,
            "AI Workshop & Hackathon",
            "5th June 2024",
            "10:00 AM - 6:00 PM",
            "Main Auditorium",
            124,
            EventCategory::Technology,
            false,
        ),
        event(
            2,
            "Cultural Fest 2024",
            "12th June 2024",
            "9:00 AM - 10:00 PM",
            "Campus Grounds",
            456,
            EventCategory::Culture,
            true,
        ),
        event(
            3,
            "Career Fair",
            "20th June 2024",
            "11:00 AM - 5:00 PM",
            "Convention Center",
            89,
            EventCategory::Career,
            false,
        ),
        event(
            4,
            "Sports Day",
            "28th June 2024",
            "8:00 AM - 6:00 PM",
            "Sports Complex",
            234,
            EventCategory::Sports,
            false,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn assignment(
    id: u32,
    title: &str,
    subject: &str,
    due_date: &str,
    days_left: u32,
    progress: u8,
    urgent: bool,
    completed: bool,
) -> Assignment {
    Assignment {
        id,
        title: title.to_string(),
        subject: subject.to_string(),
        due_date: due_date.to_string(),
        days_left,
        progress,
        urgent,
        completed,
    }
}

pub fn assignments() -> Vec<Assignment> {
    vec![
        assignment(
            1,
            "Mathematics Project",
            "Advanced Calculus",
            "Nov 29, 2024",
            2,
            60,
            true,
            false,
        ),
        assignment(
            2,
            "DBMS Report",
            "Database Management",
            "Dec 4, 2024",
            7,
            30,
            false,
            false,
        ),
        assignment(
            3,
            "Physics Lab Report",
            "Quantum Physics",
            "Dec 1, 2024",
            4,
            85,
            false,
            false,
        ),
        assignment(
            4,
            "Web Development Project",
            "Full Stack Development",
            "Nov 30, 2024",
            3,
            100,
            false,
            true,
        ),
    ]
}

pub fn clubs() -> Vec<Club> {
    let club = |id: u32,
                name: &str,
                category: &str,
                members: u32,
                next_event: &str,
                description: &str,
                icon: ClubIcon,
                is_open: bool,
                joined: bool| Club {
        id,
        name: name.to_string(),
        category: category.to_string(),
        members,
        next_event: next_event.to_string(),
        description: description.to_string(),
        icon,
        is_open,
        joined,
    };

    vec![
        club(
            1,
            "Photography Club",
            "Arts & Culture",
            234,
            "Photo Walk - Dec 2",
            "Capture moments and learn photography techniques",
            ClubIcon::Camera,
            true,
            false,
        ),
        club(
            2,
            "Coding Club",
            "Technology",
            456,
            "Hackathon - Dec 5",
            "Build projects and participate in coding challenges",
            ClubIcon::Code,
            true,
            true,
        ),
        club(
            3,
            "Music Society",
            "Arts & Culture",
            189,
            "Open Mic - Nov 30",
            "Express yourself through music and performances",
            ClubIcon::Music,
            false,
            false,
        ),
        club(
            4,
            "Art & Design",
            "Arts & Culture",
            167,
            "Exhibition - Dec 10",
            "Explore creativity through various art forms",
            ClubIcon::Palette,
            true,
            false,
        ),
        club(
            5,
            "Fitness Club",
            "Sports & Wellness",
            312,
            "Yoga Session - Tomorrow",
            "Stay fit and healthy with group workouts",
            ClubIcon::Dumbbell,
            true,
            false,
        ),
        club(
            6,
            "Social Service",
            "Community",
            278,
            "Food Drive - Dec 3",
            "Make a difference in the community",
            ClubIcon::Heart,
            false,
            false,
        ),
    ]
}

pub fn placements() -> Vec<Placement> {
    let placement = |id: u32,
                     company: &str,
                     role: &str,
                     location: &str,
                     salary: &str,
                     deadline: &str,
                     kind: PlacementKind,
                     eligibility: &str,
                     applied: bool| Placement {
        id,
        company: company.to_string(),
        role: role.to_string(),
        location: location.to_string(),
        salary: salary.to_string(),
        deadline: deadline.to_string(),
        kind,
        eligibility: eligibility.to_string(),
        applied,
    };

    vec![
        placement(
            1,
            "Google",
            "Software Engineering Intern",
            "Mountain View, CA",
            "$8,000/month",
            "2 days left",
            PlacementKind::Internship,
            "CS, IT (3rd Year+)",
            false,
        ),
        placement(
            2,
            "Microsoft",
            "Full Stack Developer",
            "Redmond, WA",
            "$120,000/year",
            "5 days left",
            PlacementKind::FullTime,
            "CS, IT (Final Year)",
            false,
        ),
        placement(
            3,
            "Amazon",
            "Cloud Solutions Architect",
            "Seattle, WA",
            "$110,000/year",
            "1 week left",
            PlacementKind::FullTime,
            "CS, IT (Final Year)",
            false,
        ),
        placement(
            4,
            "Meta",
            "Data Science Intern",
            "Menlo Park, CA",
            "$9,000/month",
            "3 days left",
            PlacementKind::Internship,
            "CS, Math (3rd Year+)",
            false,
        ),
        placement(
            5,
            "Apple",
            "iOS Developer",
            "Cupertino, CA",
            "$125,000/year",
            "1 week left",
            PlacementKind::FullTime,
            "CS, IT (Final Year)",
            true,
        ),
    ]
}

pub fn notices() -> Vec<Notice> {
    let notice = |id: u32,
                  kind: NoticeKind,
                  title: &str,
                  description: &str,
                  posted_by: &str,
                  date: &str,
                  pinned: bool| Notice {
        id,
        kind,
        title: title.to_string(),
        description: description.to_string(),
        posted_by: posted_by.to_string(),
        date: date.to_string(),
        pinned,
        bookmarked: false,
    };

    vec![
        notice(
            1,
            NoticeKind::Urgent,
            "Campus Closed Tomorrow",
            "Due to maintenance work, the campus will be closed on November 28th. All classes moved online.",
            "Administration",
            "Today",
            true,
        ),
        notice(
            2,
            NoticeKind::Info,
            "Library Hours Extended",
            "The library will now be open until 11 PM during exam week. Additional study spaces available.",
            "Library Services",
            "Yesterday",
            true,
        ),
        notice(
            3,
            NoticeKind::Success,
            "New WiFi Network Available",
            "Campus WiFi upgraded. Connect to \"Campus-Fiber\" for faster speeds. Password available at IT desk.",
            "IT Department",
            "2 days ago",
            false,
        ),
        notice(
            4,
            NoticeKind::Info,
            "Career Fair Next Week",
            "Annual career fair on December 5th. 50+ companies attending. Register through placement portal.",
            "Placement Cell",
            "3 days ago",
            false,
        ),
        notice(
            5,
            NoticeKind::Urgent,
            "Course Registration Deadline",
            "Last day to register for spring semester courses is December 1st. Late fees apply after.",
            "Academic Office",
            "4 days ago",
            false,
        ),
        notice(
            6,
            NoticeKind::Info,
            "Student Council Elections",
            "Nominations open for student council positions. Submit your application by November 30th.",
            "Student Affairs",
            "5 days ago",
            false,
        ),
    ]
}

pub fn feed_items() -> Vec<FeedItem> {
    let item = |id: u32,
                kind: FeedKind,
                title: &str,
                subtitle: &str,
                time: &str,
                priority: FeedPriority| FeedItem {
        id,
        kind,
        title: title.to_string(),
        subtitle: Some(subtitle.to_string()),
        time: time.to_string(),
        priority: Some(priority),
        completed: false,
    };

    vec![
        item(
            1,
            FeedKind::Assignment,
            "Assignment Due: Maths",
            "Calculus Problem Set 3",
            "11:59 PM",
            FeedPriority::High,
        ),
        item(
            2,
            FeedKind::Hackathon,
            "New Hackathon Posted",
            "AI Innovation Challenge",
            "Just now",
            FeedPriority::Medium,
        ),
        item(
            3,
            FeedKind::Club,
            "Clubs: Join Now",
            "Photography Club Applications Open",
            "2 hours ago",
            FeedPriority::Medium,
        ),
        item(
            4,
            FeedKind::Event,
            "Guest Lecture",
            "Machine Learning Fundamentals",
            "4:00 PM",
            FeedPriority::Medium,
        ),
        item(
            5,
            FeedKind::Assignment,
            "Assignment Due: Physics",
            "Lab Report - Thermodynamics",
            "Tomorrow",
            FeedPriority::High,
        ),
    ]
}
