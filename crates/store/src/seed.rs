use availsync_core::models::person::Person;

/// Demo users every session starts with.
pub fn demo_users() -> Vec<Person> {
    vec![
        Person::new("u1", "Alice"),
        Person::new("u2", "Bob"),
        Person::new("u3", "Carol"),
    ]
}

/// Demo mentors every session starts with.
pub fn demo_mentors() -> Vec<Person> {
    vec![
        Person::new("m1", "Dr. Smith"),
        Person::new("m2", "Jane Doe"),
        Person::new("m3", "Prof. Wilson"),
    ]
}
