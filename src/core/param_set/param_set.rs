use crate::core::base::*;
use crate::core::error::*;
use crate::core::spectrum::*;

use serde_json::{Map, Value};
use std::collections::HashMap;

/// Typed key/value bag handed to the component factories.
///
/// Keys may carry a type prefix (`"float radius"`); lookups accept both the
/// prefixed and the bare name.
#[derive(Debug, Default, Clone)]
pub struct ParamSet {
    pub bools: HashMap<String, Vec<bool>>,
    pub ints: HashMap<String, Vec<i32>>,
    pub floats: HashMap<String, Vec<Float>>,
    pub strings: HashMap<String, Vec<String>>,
    pub keys: Vec<String>,
}

fn get_key_name(key: &str) -> String {
    let ss: Vec<&str> = key.split_ascii_whitespace().collect();
    match ss.len() {
        2 => String::from(ss[1]),
        _ => String::from(key),
    }
}

fn add_values<T: Clone>(
    k: &mut Vec<String>,
    m: &mut HashMap<String, Vec<T>>,
    key: &str,
    v: &[T],
) {
    let keyname = get_key_name(key);
    if !k.contains(&keyname) {
        k.push(keyname.clone());
    }
    m.insert(keyname, v.to_vec());
}

fn get_values<'a, T>(m: &'a HashMap<String, Vec<T>>, key: &str) -> Option<&'a Vec<T>> {
    let keyname = get_key_name(key);
    return m.get(&keyname).filter(|v| !v.is_empty());
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_bool(&mut self, key: &str, v: bool) {
        add_values(&mut self.keys, &mut self.bools, key, &[v]);
    }

    pub fn add_bools(&mut self, key: &str, v: &[bool]) {
        add_values(&mut self.keys, &mut self.bools, key, v);
    }

    pub fn add_int(&mut self, key: &str, v: i32) {
        add_values(&mut self.keys, &mut self.ints, key, &[v]);
    }

    pub fn add_ints(&mut self, key: &str, v: &[i32]) {
        add_values(&mut self.keys, &mut self.ints, key, v);
    }

    pub fn add_float(&mut self, key: &str, v: Float) {
        add_values(&mut self.keys, &mut self.floats, key, &[v]);
    }

    pub fn add_floats(&mut self, key: &str, v: &[Float]) {
        add_values(&mut self.keys, &mut self.floats, key, v);
    }

    pub fn add_string(&mut self, key: &str, v: &str) {
        add_values(&mut self.keys, &mut self.strings, key, &[String::from(v)]);
    }

    pub fn add_strings(&mut self, key: &str, v: &[&str]) {
        let vv: Vec<String> = v.iter().map(|s| String::from(*s)).collect();
        add_values(&mut self.keys, &mut self.strings, key, &vv);
    }

    pub fn add_point3f(&mut self, key: &str, v: &Point3f) {
        self.add_floats(key, &[v.x, v.y, v.z]);
    }

    //--------------------

    pub fn find_one_bool(&self, key: &str, value: bool) -> bool {
        match get_values(&self.bools, key) {
            Some(v) => v[0],
            None => value,
        }
    }

    pub fn find_one_int(&self, key: &str, value: i32) -> i32 {
        match get_values(&self.ints, key) {
            Some(v) => v[0],
            None => value,
        }
    }

    /// Integer values are accepted where a float is expected.
    pub fn find_one_float(&self, key: &str, value: Float) -> Float {
        if let Some(v) = get_values(&self.floats, key) {
            return v[0];
        }
        match get_values(&self.ints, key) {
            Some(v) => v[0] as Float,
            None => value,
        }
    }

    pub fn find_one_string(&self, key: &str, value: &str) -> String {
        match get_values(&self.strings, key) {
            Some(v) => v[0].clone(),
            None => String::from(value),
        }
    }

    pub fn find_floats(&self, key: &str) -> Option<Vec<Float>> {
        if let Some(v) = get_values(&self.floats, key) {
            return Some(v.clone());
        }
        return get_values(&self.ints, key).map(|v| v.iter().map(|x| *x as Float).collect());
    }

    pub fn find_one_vector2f(&self, key: &str, value: &Vector2f) -> Vector2f {
        match self.find_floats(key) {
            Some(v) if v.len() >= 2 => Vector2f::new(v[0], v[1]),
            Some(v) => Vector2f::from(v[0]),
            None => *value,
        }
    }

    pub fn find_one_point3f(&self, key: &str, value: &Point3f) -> Point3f {
        match self.find_floats(key) {
            Some(v) if v.len() >= 3 => Point3f::new(v[0], v[1], v[2]),
            _ => *value,
        }
    }

    pub fn find_one_spectrum(&self, key: &str, value: &Spectrum) -> Spectrum {
        match self.find_floats(key) {
            Some(v) if v.len() >= 3 => Spectrum::new(v[0], v[1], v[2]),
            Some(v) => Spectrum::from(v[0]),
            None => *value,
        }
    }

    //--------------------

    pub fn replace_one_int(&mut self, key: &str, value: i32) {
        self.add_int(key, value);
    }

    pub fn replace_one_float(&mut self, key: &str, value: Float) {
        self.ints.remove(&get_key_name(key));
        self.add_float(key, value);
    }

    pub fn replace_one_string(&mut self, key: &str, value: &str) {
        self.add_string(key, value);
    }

    pub fn get_keys(&self) -> Vec<String> {
        return self.keys.clone();
    }
}

fn json_number_to_float(key: &str, v: &Value) -> Result<Float, OkapiError> {
    match v.as_f64() {
        Some(f) => Ok(f as Float),
        None => {
            let msg = format!("Parameter \"{}\" expects numbers.", key);
            Err(OkapiError::error(&msg))
        }
    }
}

impl TryFrom<&Map<String, Value>> for ParamSet {
    type Error = OkapiError;

    fn try_from(value: &Map<String, Value>) -> Result<Self, Self::Error> {
        let mut params = ParamSet::new();
        for (key, v) in value.iter() {
            match v {
                Value::Bool(b) => params.add_bool(key, *b),
                Value::Number(n) => match n.as_i64() {
                    Some(i) if i >= i32::MIN as i64 && i <= i32::MAX as i64 => {
                        params.add_int(key, i as i32)
                    }
                    _ => params.add_float(key, json_number_to_float(key, v)?),
                },
                Value::String(s) => params.add_string(key, s),
                Value::Array(items) => {
                    if items.iter().all(|x| x.is_string()) {
                        let ss: Vec<&str> = items.iter().filter_map(|x| x.as_str()).collect();
                        params.add_strings(key, &ss);
                    } else if items.iter().all(|x| x.is_boolean()) {
                        let bs: Vec<bool> = items.iter().filter_map(|x| x.as_bool()).collect();
                        params.add_bools(key, &bs);
                    } else {
                        let mut fs = Vec::with_capacity(items.len());
                        for x in items.iter() {
                            fs.push(json_number_to_float(key, x)?);
                        }
                        params.add_floats(key, &fs);
                    }
                }
                Value::Null | Value::Object(_) => {
                    let msg = format!("Parameter \"{}\" has an unsupported value type.", key);
                    return Err(OkapiError::error(&msg));
                }
            }
        }
        return Ok(params);
    }
}
