//! Local mental-health support directory

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalService {
    pub name: &'static str,
    pub kind: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub hours: &'static str,
    pub services: &'static [&'static str],
    pub description: &'static str,
}

pub static LOCAL_SERVICES: [LocalService; 6] = [
    LocalService {
        name: "Mariveles Municipal Health Office",
        kind: "Government Health Center",
        address: "Municipal Building, Mariveles, Bataan",
        phone: "(047) 935-2234",
        hours: "Mon-Fri: 8:00 AM - 5:00 PM",
        services: &["Mental Health Counseling", "Crisis Intervention", "Health Education"],
        description: "Primary mental health services for the municipality",
    },
    LocalService {
        name: "Bataan General Hospital",
        kind: "Public Hospital",
        address: "Roman Superhighway, Balanga, Bataan",
        phone: "(047) 791-2131",
        hours: "24/7 Emergency Services",
        services: &["Psychiatric Services", "Emergency Mental Health", "Inpatient Care"],
        description: "Full psychiatric and mental health services",
    },
    LocalService {
        name: "Mariveles High School Guidance Office",
        kind: "School Counseling",
        address: "A. Bonifacio St, Mariveles, Bataan",
        phone: "(047) 935-1234",
        hours: "Mon-Fri: 7:00 AM - 4:00 PM (School Days)",
        services: &["Student Counseling", "Family Therapy", "Academic Support"],
        description: "Counseling services for students and families",
    },
    LocalService {
        name: "Bagac Community Health Center",
        kind: "Community Health",
        address: "National Road, Bagac, Bataan",
        phone: "(047) 481-2345",
        hours: "Mon-Fri: 8:00 AM - 5:00 PM",
        services: &["Basic Counseling", "Health Screening", "Referral Services"],
        description: "Community-based mental health support",
    },
    LocalService {
        name: "DOH-CHD III Mental Health Program",
        kind: "Regional Health Office",
        address: "Regional Government Center, San Fernando, Pampanga",
        phone: "(045) 455-1234",
        hours: "Mon-Fri: 8:00 AM - 5:00 PM",
        services: &["Mental Health Programs", "Training", "Policy Support"],
        description: "Regional mental health program coordination",
    },
    LocalService {
        name: "Softnet Information Technology Center",
        kind: "Community Resource Center",
        address: "SFB No. 8, FAB, Mariveles, Bataan",
        phone: "(047) 935-5678",
        hours: "Mon-Fri: 9:00 AM - 6:00 PM",
        services: &[
            "Digital Mental Health Resources",
            "Community Training",
            "Referral Assistance",
        ],
        description: "Access to mental health information and digital support for the Mariveles community",
    },
];
