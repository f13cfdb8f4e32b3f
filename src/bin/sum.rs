use notjs::list::{EncodedList, sum_all};

fn main() {
    env_logger::init();

    let list = EncodedList::pair(
        1,
        EncodedList::pair(2, EncodedList::pair(3, EncodedList::pair(4, EncodedList::empty()))),
    );

    println!("{}", sum_all(&list));
}
