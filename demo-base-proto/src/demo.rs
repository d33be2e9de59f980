use std::io::{self, Write};

use tracing::debug;

use crate::pb::Student;

/// Build the demo record: fixed scalars, then three books in order.
pub fn populate() -> Student {
    let mut stu = Student::default();

    stu.name = "automan".to_string();
    stu.age = 8;
    stu.height = 1.4;
    stu.add_book("yuwen");
    stu.add_book("shuxue");
    stu.add_book("C++");

    debug!("populated student with {} books", stu.books_size());
    stu
}

/// Populate the demo record and write its report to `out`.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    let stu = populate();
    writeln!(out, "{}", stu)?;
    out.flush()
}
