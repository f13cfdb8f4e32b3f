use std::io;

use notjs::list::{EncodedList, print_all};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let list = EncodedList::pair(
        1,
        EncodedList::pair(2, EncodedList::pair(3, EncodedList::pair(4, EncodedList::empty()))),
    );

    print_all(&list, &mut io::stdout().lock())?;
    Ok(())
}
