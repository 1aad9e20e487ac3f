use fieldpresence_core::presence_record;

presence_record! {
    #[derive(Debug, Clone, PartialEq)]
    pub struct DetectMissing {
        #[tag = 1]
        foo: i32 = 5,
        #[tag = 2]
        bar: String = String::from("abc"),
    }
}
