mod descriptor;
mod layer;
