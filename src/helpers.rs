use nanoid::nanoid;

pub fn custom_nanoid() -> String {
  nanoid!()
}
